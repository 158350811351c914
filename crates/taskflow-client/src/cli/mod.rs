/*
[INPUT]:  Parsed subcommand and client settings
[OUTPUT]: Session sign-in, one store operation, rendered result
[POS]:    CLI layer - view composition over the task store
[UPDATE]: When adding subcommands
*/

mod render;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Subcommand};

use taskflow_adapter::{Priority, StaticAuthenticator, TaskStatus, TaskflowClient};
use taskflow_client::{
    ClientSettings, FieldUpdate, FilterCriteria, Notifier, Preferences, Selector, Session,
    StoreError,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tasks, optionally filtered
    List(ListArgs),
    /// Create a task
    Add {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit an existing task
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a task
    Delete { id: String },
    /// Flip a task between completed and pending
    Toggle { id: String },
    /// Show the signed-in profile
    Whoami,
    /// Show or switch the color theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// End the backend session
    Logout,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value = "all")]
    status: Selector<TaskStatus>,
    #[arg(long, default_value = "all")]
    priority: Selector<Priority>,
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    #[arg(long)]
    description: Option<String>,
    /// YYYY-MM-DD; pass an empty string to clear
    #[arg(long)]
    due: Option<String>,
    #[arg(long)]
    priority: Option<Priority>,
    #[arg(long)]
    status: Option<TaskStatus>,
}

impl FieldArgs {
    fn updates(self, title: Option<String>) -> Vec<FieldUpdate> {
        let mut updates = Vec::new();
        if let Some(title) = title {
            updates.push(FieldUpdate::Title(title));
        }
        if let Some(description) = self.description {
            updates.push(FieldUpdate::Description(description));
        }
        if let Some(due) = self.due {
            updates.push(FieldUpdate::DueDate(due));
        }
        if let Some(priority) = self.priority {
            updates.push(FieldUpdate::Priority(priority));
        }
        if let Some(status) = self.status {
            updates.push(FieldUpdate::Status(status));
        }
        updates
    }
}

pub async fn run(settings: ClientSettings, command: Command) -> Result<()> {
    let mut preferences = load_preferences(&settings)?;

    if let Command::Theme { toggle } = command {
        if toggle {
            preferences
                .toggle_dark_mode()
                .context("save preferences")?;
        }
        render::theme(preferences.dark_mode());
        return Ok(());
    }

    let palette = render::Palette::new(preferences.dark_mode());
    let client = TaskflowClient::with_config(settings.client_config()).context("build client")?;
    let notifier = Notifier::new();
    let authenticator = StaticAuthenticator::new(settings.token.clone(), settings.profile.clone());
    let mut session = Session::sign_in(&authenticator, client, notifier.clone())
        .await
        .context("sign in")?;

    println!("{}", palette.header(&session.greeting()));

    match command {
        Command::Whoami => {
            render::profile(&palette, session.profile());
            return Ok(());
        }
        Command::Logout => {
            session.end().await;
            println!("Logged out");
            return Ok(());
        }
        _ => {}
    }

    let store = session.store_mut();
    store.load().await;
    if let Some(err) = store.load_error() {
        render::notification(&palette, notifier.current().as_ref());
        return Err(anyhow!("could not load tasks ({err}); run the command again to retry"));
    }

    let mut criteria = FilterCriteria::default();
    let outcome: Result<(), StoreError> = match command {
        Command::List(args) => {
            criteria = FilterCriteria {
                status: args.status,
                priority: args.priority,
                search: args.search,
            };
            Ok(())
        }
        Command::Add { title, fields } => {
            for update in fields.updates(Some(title)) {
                store.form_mut().set_field(update);
            }
            store.submit_form().await.map(|_| ())
        }
        Command::Edit { id, title, fields } => match store.begin_edit(&id) {
            Ok(()) => {
                for update in fields.updates(title) {
                    store.form_mut().set_field(update);
                }
                store.submit_form().await.map(|_| ())
            }
            Err(err) => Err(err),
        },
        Command::Delete { id } => store.remove(&id).await.map(|_| ()),
        Command::Toggle { id } => store.toggle_completion(&id).await.map(|_| ()),
        Command::Whoami | Command::Logout | Command::Theme { .. } => Ok(()),
    };

    render::notification(&palette, notifier.current().as_ref());
    if let Err(StoreError::Validation(errors)) = &outcome {
        render::validation(&palette, errors);
    }
    render::tasks(&palette, &store.derive(&criteria), store.tasks().len(), store.counts());

    outcome.map_err(|err| anyhow!(err))
}

fn load_preferences(settings: &ClientSettings) -> Result<Preferences> {
    let path = settings
        .preferences_path
        .clone()
        .or_else(Preferences::default_path)
        .context("no data directory for preferences")?;
    Preferences::load(path).context("load preferences")
}
