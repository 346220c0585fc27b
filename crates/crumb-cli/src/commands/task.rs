use chrono::{DateTime, Utc};
use serde::Serialize;

use crumb_core::entities::{Task, TaskDraft, TaskPatch};
use crumb_core::enums::TaskStatus;
use crumb_core::errors::CoreError;
use crumb_core::reward::RewardInfo;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TaskCommands, TaskCreateArgs, TaskStatusArgs, TaskUpdateArgs};
use crate::commands::shared::{apply_limit, ensure_loaded, parse};
use crate::context::AppContext;
use crate::output::output;

/// Handle `crumb task <subcommand>`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List { mine } => list(*mine, ctx, flags).await,
        TaskCommands::Get { id } => get(id, ctx, flags).await,
        TaskCommands::Create(args) => create(args, ctx, flags).await,
        TaskCommands::Update(args) => update(args, ctx, flags).await,
        TaskCommands::Delete { id } => delete(id, ctx, flags).await,
        TaskCommands::Status(args) => set_status(args, ctx, flags).await,
        TaskCommands::Complete { id } => complete(id, ctx, flags).await,
        TaskCommands::Comment { id, text } => comment(id, text, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct TaskRow {
    id: String,
    title: String,
    status: &'static str,
    priority: &'static str,
    due: Option<String>,
    assignee: Option<String>,
    project: Option<String>,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status.as_str(),
            priority: task.priority.as_str(),
            due: task.due_date.map(|d| d.to_rfc3339()),
            assignee: task.assigned_to.as_ref().map(|u| u.name.clone()),
            project: task.project.as_ref().map(|p| p.name.clone()),
        }
    }
}

async fn list(mine: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if mine {
        ctx.store.tasks.fetch_mine().await;
    } else {
        ctx.store.tasks.fetch_all().await;
    }
    let tasks = ensure_loaded(&ctx.store.tasks.tasks)?;
    let rows = apply_limit(tasks, flags.limit, ctx.config.general.default_limit)
        .iter()
        .map(TaskRow::from_task)
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

async fn get(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.tasks.fetch_by_id(id).await;
    let task = ensure_loaded(&ctx.store.tasks.current)?;
    output(task, flags.format)
}

async fn create(
    args: &TaskCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = TaskDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        priority: parse::task_priority(&args.priority)?,
        due_date: args.due.as_deref().map(parse::due_date).transpose()?,
        assigned_to: args.assign.clone(),
        project: args.project.clone(),
    };
    let task = ctx.store.tasks.create(&draft).await?;
    output(&task, flags.format)
}

async fn update(
    args: &TaskUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let patch = TaskPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        priority: args.priority.as_deref().map(parse::task_priority).transpose()?,
        due_date: args.due.as_deref().map(parse::due_date).transpose()?,
        assigned_to: args.assign.clone(),
        project: args.project.clone(),
    };
    let task = ctx.store.tasks.update(&args.id, &patch).await?;
    output(&task, flags.format)
}

#[derive(Serialize)]
struct DeleteResult {
    deleted: String,
}

async fn delete(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.tasks.delete(id).await?;
    output(
        &DeleteResult {
            deleted: id.to_string(),
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct StatusResult {
    id: String,
    status: &'static str,
    reward: Option<RewardInfo>,
}

/// Pre-flight for a status change: reject transitions the backend would
/// refuse, without the status round trip. A fetch failure leaves `current`
/// empty; the backend then has the final word on the mutation itself.
fn check_transition(
    current: Option<&Task>,
    id: &str,
    target: TaskStatus,
) -> Result<(), CoreError> {
    match current {
        Some(task) if task.id == id => task.validate_transition(target),
        _ => Ok(()),
    }
}

async fn set_status(
    args: &TaskStatusArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = parse::task_status(&args.status)?;

    ctx.store.tasks.fetch_by_id(&args.id).await;
    check_transition(ctx.store.tasks.current.data(), &args.id, target)?;

    let envelope = ctx.store.tasks.update_status(&args.id, target).await?;
    record_reward_notification(ctx, envelope.reward_info.as_ref(), Utc::now());
    output(
        &StatusResult {
            id: envelope.task.id.clone(),
            status: envelope.task.status.as_str(),
            reward: envelope.reward_info,
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct CompleteResult {
    id: String,
    status: &'static str,
    /// Locally computed before the round trip; the backend's `reward` is
    /// authoritative.
    preview: Option<RewardInfo>,
    reward: Option<RewardInfo>,
}

async fn complete(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.tasks.fetch_by_id(id).await;
    check_transition(ctx.store.tasks.current.data(), id, TaskStatus::Completed)?;
    let preview = ctx.store.tasks.preview_completion(Utc::now());

    let envelope = ctx
        .store
        .tasks
        .update_status(id, TaskStatus::Completed)
        .await?;
    record_reward_notification(ctx, envelope.reward_info.as_ref(), Utc::now());
    output(
        &CompleteResult {
            id: envelope.task.id.clone(),
            status: envelope.task.status.as_str(),
            preview,
            reward: envelope.reward_info,
        },
        flags.format,
    )
}

/// Drop an optimistic local notification for an earned reward. If the backend
/// later confirms one with the same wording, the slice merges them.
fn record_reward_notification(
    ctx: &mut AppContext,
    reward: Option<&RewardInfo>,
    now: DateTime<Utc>,
) {
    let Some(reward) = reward else { return };
    if reward.points_earned > 0 {
        ctx.store.notifications.insert_local(
            crumb_core::enums::NotificationKind::Reward,
            format!(
                "Task completed! You earned {} points!",
                reward.points_earned
            ),
            now,
        );
    }
}

async fn comment(
    id: &str,
    text: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = ctx.store.tasks.add_comment(id, text).await?;
    output(&task, flags.format)
}
