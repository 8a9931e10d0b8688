//! Task CLI commands
//!
//! Each command loads the store, applies one operation (which persists it)
//! and reports the result.

use anyhow::{bail, Result};

use super::output::Output;
use crate::domain::Task;
use crate::state::TaskStore;
use crate::storage::{FileKvStore, Workspace};

fn open_store(workspace: &Workspace) -> Result<TaskStore<FileKvStore>> {
    TaskStore::load(workspace.kv_store())
}

fn task_json(position: usize, task: &Task) -> serde_json::Value {
    serde_json::json!({
        "position": position + 1,
        "id": task.id.to_string(),
        "text": task.text,
        "completed": task.completed,
    })
}

pub fn add(workspace: &Workspace, output: &Output, text: &str) -> Result<()> {
    let mut store = open_store(workspace)?;

    let Some(index) = store.add(text)? else {
        output.verbose_ctx("add", "Ignoring blank task text");
        if output.is_json() {
            output.data(&serde_json::json!({ "added": false }));
        } else {
            println!("Nothing to add: task text is blank");
        }
        return Ok(());
    };

    let task = &store.tasks()[index];
    if output.is_json() {
        output.data(&task_json(index, task));
    } else {
        output.success(&format!("Added task {}: {}", index + 1, task.text));
    }

    Ok(())
}

pub fn list(workspace: &Workspace, output: &Output) -> Result<()> {
    let store = open_store(workspace)?;
    let tasks = store.tasks();

    if output.is_json() {
        let items: Vec<_> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| task_json(i, t))
            .collect();
        output.data(&items);
    } else if tasks.is_empty() {
        println!("No tasks");
    } else {
        let width = tasks.len().to_string().len();
        for (i, task) in tasks.iter().enumerate() {
            println!("{:>width$}. {} {}", i + 1, task.marker(), task.text, width = width);
        }
        println!();
        println!(
            "{} task(s), {} completed",
            tasks.len(),
            store.list().completed_count()
        );
    }

    Ok(())
}

pub fn toggle(workspace: &Workspace, output: &Output, reference: &str) -> Result<()> {
    let mut store = open_store(workspace)?;
    let index = store.resolve(reference)?;

    store.toggle_complete(index)?;

    let task = &store.tasks()[index];
    if output.is_json() {
        output.data(&task_json(index, task));
    } else if task.completed {
        output.success(&format!("Completed: {}", task.text));
    } else {
        output.success(&format!("Reopened: {}", task.text));
    }

    Ok(())
}

pub fn edit(workspace: &Workspace, output: &Output, reference: &str, text: &str) -> Result<()> {
    let mut store = open_store(workspace)?;
    let index = store.resolve(reference)?;

    store.start_edit(index);
    store.set_edit_draft(text);
    if !store.save_edit(index)? {
        bail!("Task text cannot be blank");
    }

    let task = &store.tasks()[index];
    if output.is_json() {
        output.data(&task_json(index, task));
    } else {
        output.success(&format!("Updated task {}: {}", index + 1, task.text));
    }

    Ok(())
}

pub fn remove(workspace: &Workspace, output: &Output, reference: &str) -> Result<()> {
    let mut store = open_store(workspace)?;
    let index = store.resolve(reference)?;

    let Some(task) = store.delete(index)? else {
        bail!("Task not found: {}", reference);
    };

    if output.is_json() {
        output.data(&task_json(index, &task));
    } else {
        output.success(&format!("Deleted: {}", task.text));
    }

    Ok(())
}
