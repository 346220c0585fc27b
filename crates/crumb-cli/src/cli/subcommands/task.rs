use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        /// Only tasks assigned to the authenticated user.
        #[arg(long)]
        mine: bool,
    },
    /// Show one task, including comments.
    Get { id: String },
    /// Create a task.
    Create(TaskCreateArgs),
    /// Update task fields.
    Update(TaskUpdateArgs),
    /// Delete a task.
    Delete { id: String },
    /// Change a task's status.
    Status(TaskStatusArgs),
    /// Mark a task completed, showing the reward preview and the backend's
    /// confirmed reward.
    Complete { id: String },
    /// Add a comment to a task.
    Comment { id: String, text: String },
}

#[derive(Clone, Debug, Args)]
pub struct TaskCreateArgs {
    pub title: String,
    /// Priority: low, medium, high.
    #[arg(long, default_value = "medium")]
    pub priority: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date, RFC 3339 or YYYY-MM-DD.
    #[arg(long)]
    pub due: Option<String>,
    /// Assignee user id.
    #[arg(long)]
    pub assign: Option<String>,
    /// Project id.
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Priority: low, medium, high.
    #[arg(long)]
    pub priority: Option<String>,
    /// Due date, RFC 3339 or YYYY-MM-DD.
    #[arg(long)]
    pub due: Option<String>,
    /// Assignee user id.
    #[arg(long)]
    pub assign: Option<String>,
    /// Project id.
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskStatusArgs {
    pub id: String,
    /// Target status: pending, in_progress, completed, on_hold.
    pub status: String,
}
