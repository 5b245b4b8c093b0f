use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use flowlist_core::domain::{Priority, PriorityFilter, TaskDraft, TaskPatch};
use flowlist_core::impls::FileStorage;
use flowlist_core::ports::{Clock, SystemClock, UlidGenerator};
use flowlist_core::store::TaskStore;
use flowlist_core::views::{
    MonthRef, TaskFilter, all_tags, build_month_grid, completion_stats, completion_trend,
    filter_tasks, priority_histogram,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // (A) Wire the store: file-backed storage, wall clock, ULID ids.
    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flowlist-data".to_string());
    let clock = SystemClock;
    let mut store = TaskStore::new(
        FileStorage::new(&data_dir),
        clock,
        UlidGenerator::new(clock),
    );
    let loaded = store.load()?;
    println!("loaded {loaded} task(s) from {data_dir}/");

    // (B) Create a few tasks.
    let today = clock.now().date_naive();
    let report = store.add(draft(
        "Write quarterly report",
        Some("numbers for the board"),
        Priority::High,
        &["work"],
        today.succ_opt(),
    ))?;
    let groceries = store.add(draft(
        "Buy groceries",
        None,
        Priority::Low,
        &["home", "errands"],
        Some(today),
    ))?;
    store.add(draft(
        "Plan sprint",
        Some("carry over review feedback"),
        Priority::Medium,
        &["work", "planning"],
        None,
    ))?;
    println!("created: {} / {} / Plan sprint", report.title, groceries.title);

    // (C) Mutate: finish one, reprioritize another.
    let done = store.toggle(groceries.id)?;
    println!("completed: {} at {:?}", done.title, done.completed_at);

    store.update(
        report.id,
        TaskPatch {
            priority: Some(Priority::High),
            due_date: Some(today.succ_opt().and_then(|d| d.succ_opt())),
            ..TaskPatch::default()
        },
    )?;

    // (D) Query the list view.
    let work_filter = TaskFilter {
        search: String::new(),
        priority: PriorityFilter::All,
        tags: vec!["work".to_string()],
    };
    let work_tasks = filter_tasks(store.list(), &work_filter);
    println!("tagged 'work': {} task(s)", work_tasks.len());
    for task in &work_tasks {
        println!("  [{}] {} ({})", check(task.completed), task.title, task.priority);
    }
    println!("tags in use: {:?}", all_tags(store.list()));

    // (E) Analytics.
    let now = clock.now();
    let stats = completion_stats(store.list(), now);
    println!(
        "stats: {}/{} done ({:.0}%), {} overdue, {} upcoming",
        stats.completed, stats.total, stats.completion_rate, stats.overdue, stats.upcoming
    );
    let histogram = priority_histogram(store.list());
    println!(
        "priorities: low={} medium={} high={}",
        histogram.low, histogram.medium, histogram.high
    );
    for point in completion_trend(store.list(), now) {
        println!("  {}: {} completed, {} active", point.date, point.completed, point.active);
    }

    // (F) Calendar grid for the current month.
    let month = MonthRef::containing(now.date_naive());
    let grid = build_month_grid(month, store.list());
    let busy_days = grid.iter().filter(|cell| !cell.tasks.is_empty()).count();
    println!(
        "calendar {}-{:02}: {} cells, {} day(s) with due tasks",
        month.year(),
        month.month(),
        grid.len(),
        busy_days
    );

    // (G) Snapshot the collection as pretty JSON.
    let exported = store.export()?;
    println!("export is {} bytes of JSON", exported.len());

    Ok(())
}

fn draft(
    title: &str,
    description: Option<&str>,
    priority: Priority,
    tags: &[&str],
    due_date: Option<NaiveDate>,
) -> TaskDraft {
    let mut draft = TaskDraft::new(title);
    draft.description = description.map(String::from);
    draft.priority = priority;
    draft.tags = tags.iter().map(|t| t.to_string()).collect();
    draft.due_date = due_date;
    draft
}

fn check(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}
