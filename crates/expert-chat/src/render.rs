//! Markdown shown to the user.
use expert_prompt::builder::PromptBuilder;
use expert_types::Persona;

use crate::submission::SubmissionOutcome;

pub const TITLE: &str = "🤖 AI専門家チャットボット";

/// Title, what the application does, how to use it and which experts exist.
pub fn overview() -> String {
    let builder = PromptBuilder::new()
        .add_section_h1(TITLE)
        .add_blank_line()
        .add_section_h2("アプリの概要")
        .add_line("このアプリでは、様々な分野の専門家として振る舞うAIとチャットできます。")
        .add_line("質問したい分野の専門家を選択して、自由に質問してみてください。")
        .add_blank_line()
        .add_section_h2("操作方法")
        .add_step(
            1,
            "専門家を選択",
            "`--persona` で相談したい分野の専門家を選んでください",
        )
        .add_step(
            2,
            "質問を入力",
            "質問や相談内容を引数、または標準入力で渡してください",
        )
        .add_step(3, "送信", "実行するとAI専門家からの回答が表示されます")
        .add_blank_line()
        .add_section_h2("利用可能な専門家");

    Persona::ALL
        .into_iter()
        .fold(builder, |b, persona| {
            b.add_bullet_key_value(persona.label(), persona.summary())
        })
        .add_delimiter()
        .finalize()
}

/// One line per persona: slug, label and topic.
pub fn persona_list() -> String {
    Persona::ALL
        .into_iter()
        .fold(PromptBuilder::new(), |b, persona| {
            b.add_bullet_key_value(
                persona.slug(),
                format!("{} ({})", persona.label(), persona.summary()),
            )
        })
        .finalize()
}

/// Shown while the request is in flight.
pub fn progress(persona: Persona) -> String {
    format!("{persona}が回答を準備しています...")
}

pub fn outcome(outcome: &SubmissionOutcome) -> String {
    let builder = PromptBuilder::new();

    let builder = match outcome {
        SubmissionOutcome::EmptyInput => builder.add_line("質問を入力してください。"),
        SubmissionOutcome::Answered { persona, reply } => builder
            .add_line_bold("回答が完了しました！")
            .add_blank_line()
            .add_section_h2(format!("💬 {persona}からの回答:"))
            .add_line(reply),
        SubmissionOutcome::Failed { message, .. } => {
            builder.add_key_value("エラーが発生しました", message)
        }
    };

    match outcome.hint() {
        Some(hint) => builder.add_line(hint).finalize(),
        None => builder.finalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::CREDENTIAL_HINT;

    #[test]
    fn overview_lists_every_persona() {
        let text = overview();

        assert!(text.starts_with(&format!("# {TITLE}\n")));
        for persona in Persona::ALL {
            assert!(text.contains(&format!("- **{}**: {}", persona.label(), persona.summary())));
        }
    }

    #[test]
    fn persona_list_shows_slugs() {
        let text = persona_list();
        assert_eq!(text.lines().count(), Persona::ALL.len());
        assert!(text.contains("- **it**: IT専門家"));
    }

    #[test]
    fn progress_names_the_persona() {
        assert_eq!(progress(Persona::It), "IT専門家が回答を準備しています...");
    }

    #[test]
    fn answer_is_rendered_under_persona_heading() {
        let text = outcome(&SubmissionOutcome::Answered {
            persona: Persona::Culinary,
            reply: "塩を少々。".into(),
        });

        assert_eq!(
            text,
            "**回答が完了しました！**\n\n## 💬 料理専門家からの回答:\n塩を少々。\n"
        );
    }

    #[test]
    fn failure_shows_message_and_hint() {
        let text = outcome(&SubmissionOutcome::Failed {
            persona: Persona::Medical,
            message: "request failed".into(),
        });

        assert_eq!(
            text,
            format!("**エラーが発生しました**: request failed\n{CREDENTIAL_HINT}\n")
        );
    }

    #[test]
    fn empty_input_asks_for_a_question() {
        assert_eq!(
            outcome(&SubmissionOutcome::EmptyInput),
            "質問を入力してください。\n"
        );
    }
}
