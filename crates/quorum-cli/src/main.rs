mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quorum", about = "Make group decisions from the command line", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Quorum workspace with sample decisions
    Init,

    /// List decisions
    List {
        /// Only decisions with this status (active, finalized)
        #[arg(long)]
        status: Option<String>,

        /// Only decisions whose topic contains this text (case-insensitive)
        #[arg(long)]
        topic: Option<String>,
    },

    /// Show a decision with its vote breakdown and discussion
    Show {
        /// Decision ID
        id: String,
    },

    /// Create a new decision
    Create {
        /// What is being decided
        #[arg(short, long)]
        topic: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Candidate option (repeatable; blank options are ignored)
        #[arg(short, long = "option", required = true)]
        options: Vec<String>,

        /// Deadline date (YYYY-MM-DD); defaults to now
        #[arg(long)]
        due: Option<String>,

        /// Deadline time of day (HH:MM, local time)
        #[arg(long, requires = "due")]
        time: Option<String>,
    },

    /// Vote for an option
    Vote {
        /// Decision ID
        id: String,

        /// Option to vote for
        #[arg(short, long)]
        option: String,

        /// Optional comment on the vote
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Post a message to a decision's discussion
    Comment {
        /// Decision ID
        id: String,

        /// Message text
        #[arg(short, long)]
        message: String,

        /// Author name (defaults to $QUORUM_AUTHOR_NAME, then the workspace config)
        #[arg(long)]
        author: Option<String>,
    },

    /// Change the topic, description or deadline of a decision
    Update {
        /// Decision ID
        id: String,

        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// New deadline date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// New deadline time of day (HH:MM, local time)
        #[arg(long, requires = "due")]
        time: Option<String>,
    },

    /// Close voting on a decision
    Finalize {
        /// Decision ID
        id: String,
    },
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::List { status, topic } => commands::list::run(status, topic, cli.json),
        Commands::Show { id } => commands::show::run(id, cli.json),
        Commands::Create {
            topic,
            description,
            options,
            due,
            time,
        } => commands::create::run(topic, description, options, due, time, cli.json),
        Commands::Vote {
            id,
            option,
            comment,
        } => commands::vote::run(id, option, comment, cli.json),
        Commands::Comment {
            id,
            message,
            author,
        } => commands::comment::run(id, message, author, cli.json),
        Commands::Update {
            id,
            topic,
            description,
            due,
            time,
        } => commands::update::run(id, topic, description, due, time, cli.json),
        Commands::Finalize { id } => commands::finalize::run(id, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
