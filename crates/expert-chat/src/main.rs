use std::io::IsTerminal as _;

use clap::Parser;
use expert_chat::{
    Persona,
    config::AppConfig,
    render,
    submission::{Submission, handle_submission},
};
use tokio::io::AsyncReadExt as _;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "expert-chat", version)]
#[command(about = "Ask a medical, legal, IT or culinary expert persona a question")]
struct Args {
    /// Expert to consult: a label such as `IT専門家`, or medical, legal, it, culinary
    #[arg(long, short = 'p', default_value_t = Persona::default(), value_parser = parse_persona)]
    persona: Persona,

    /// Print the application overview and exit
    #[arg(long)]
    about: bool,

    /// List the available experts and exit
    #[arg(long)]
    list_personas: bool,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenAI-compatible endpoint (defaults to https://api.openai.com/v1)
    #[arg(long, env = "OPENAI_BASE_URL")]
    base_url: Option<String>,

    /// Question to ask; read from stdin when omitted
    question: Vec<String>,
}

fn parse_persona(value: &str) -> Result<Persona, String> {
    value.trim().parse::<Persona>().map_err(|err| {
        let known: Vec<_> = Persona::ALL.iter().map(|p| p.slug()).collect();
        format!("{err} (expected a label or one of: {})", known.join(", "))
    })
}

async fn read_question() -> anyhow::Result<String> {
    if std::io::stdin().is_terminal() {
        eprintln!("質問や相談内容を入力してください (Ctrl-D で送信):");
    }
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    Ok(input)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` first so clap's `env` fallbacks can see it.
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.about {
        print!("{}", render::overview());
        return Ok(());
    }
    if args.list_personas {
        print!("{}", render::persona_list());
        return Ok(());
    }

    let input = if args.question.is_empty() {
        read_question().await?
    } else {
        args.question.join(" ")
    };

    let config = AppConfig {
        api_key: args.api_key,
        base_url: args.base_url,
    };
    let submission = Submission::new(args.persona, input);

    if !submission.is_blank() {
        eprintln!("{}", render::progress(submission.persona));
    }

    let outcome = handle_submission(&submission, || config.connect()).await;
    print!("{}", render::outcome(&outcome));

    Ok(())
}
