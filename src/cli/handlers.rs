use std::error::Error;
use std::path::Path;

use chrono::Local;

use crate::cli::commands::{Cli, Commands, FileArgs};
use crate::cli::output::*;
use crate::io::tasks_io;
use crate::layout::{ChartModel, fmt_month, unparseable_fields};
use crate::model::{Task, sample_tasks};
use crate::tui;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;

    match cli.command {
        // No subcommand → open the TUI on the tasks file
        None => tui::run(&cli.file),
        Some(Commands::Demo) => tui::run_with_tasks(sample_tasks()),
        Some(Commands::Layout(args)) => cmd_layout(args, json),
        Some(Commands::Tasks(args)) => cmd_tasks(args, json),
        Some(Commands::Check(args)) => cmd_check(args, json),
    }
}

fn load(path: &Path) -> Result<Vec<Task>, Box<dyn Error>> {
    Ok(tasks_io::load_tasks(path)?)
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_layout(args: FileArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let input = load(&args.file)?;
    let model = ChartModel::build(&input, Local::now().date_naive());

    if json {
        let out = LayoutJson {
            total_days: model.grid.total_days(),
            months: model
                .month_spans
                .iter()
                .map(|s| MonthSpanJson {
                    label: fmt_month(s.month),
                    month: s.month,
                    start_index: s.start_index,
                    days: s.days,
                })
                .collect(),
            tasks: model
                .tasks
                .iter()
                .zip(&model.bars)
                .map(|(t, b)| TaskLayoutJson {
                    id: t.id().to_string(),
                    name: t.name().to_string(),
                    start: t.start,
                    end: t.end,
                    start_label: b.start_label.clone(),
                    end_label: b.end_label.clone(),
                    day_span: b.day_span,
                    left_percent: b.left_percent,
                    width_percent: b.width_percent,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} day columns", model.grid.total_days());
    for span in &model.month_spans {
        println!(
            "  {:<9} columns {}..{} ({} days)",
            fmt_month(span.month),
            span.start_index,
            span.start_index + span.days - 1,
            span.days,
        );
    }
    if model.is_empty() {
        println!("no tasks to display");
        return Ok(());
    }
    println!();
    for (task, bar) in model.tasks.iter().zip(&model.bars) {
        println!(
            "  {:<30} {} → {}  {:>3} days  left {:.1}%  width {:.1}%",
            task.name(),
            bar.start_label,
            bar.end_label,
            bar.day_span,
            bar.left_percent,
            bar.width_percent,
        );
    }
    Ok(())
}

fn cmd_tasks(args: FileArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let input = load(&args.file)?;
    let model = ChartModel::build(&input, Local::now().date_naive());
    let dropped = input.len() - model.tasks.len();

    if json {
        let out = TasksJson {
            total: input.len(),
            dropped,
            tasks: model
                .tasks
                .iter()
                .map(|t| NormalizedTaskJson {
                    id: t.id().to_string(),
                    name: t.name().to_string(),
                    start: t.start,
                    end: t.end,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for task in &model.tasks {
        println!(
            "  {:<8} {:<30} {} → {}",
            task.id().to_string(),
            task.name(),
            task.start,
            task.end,
        );
    }
    if dropped > 0 {
        println!("  ({} task(s) dropped; run `gantry check`)", dropped);
    }
    Ok(())
}

fn cmd_check(args: FileArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let input = load(&args.file)?;

    let dropped: Vec<DroppedTaskJson> = input
        .iter()
        .filter_map(|task| {
            let fields = unparseable_fields(task);
            if fields.is_empty() {
                None
            } else {
                Some(DroppedTaskJson {
                    id: task.id.to_string(),
                    name: task.name.clone(),
                    fields,
                })
            }
        })
        .collect();

    if json {
        let out = CheckJson {
            checked: input.len(),
            dropped,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        if out.dropped.is_empty() {
            return Ok(());
        }
        // Same exit contract as text mode: scripting callers rely on it
        return Err(format!("{} task(s) with unparseable dates", out.dropped.len()).into());
    }

    if dropped.is_empty() {
        println!("ok: {} task(s), all dates parse", input.len());
        return Ok(());
    }
    for task in &dropped {
        println!("task {} ({}):", task.id, task.name);
        for issue in &task.fields {
            println!("  {}: unparseable date {:?}", issue.field, issue.value);
        }
    }
    Err(format!("{} task(s) with unparseable dates", dropped.len()).into())
}
