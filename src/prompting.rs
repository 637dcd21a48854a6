use minijinja::{context, Environment};

const SYSTEM_PROMPT_TEMPLATE: &str = include_str!("prompts/system_prompt.j2");

pub struct SystemPromptContext<'a> {
    pub agent_name: &'a str,
    pub description: &'a str,
}

/// Default system prompt used when an agent has no configured prompt.
pub fn render_default_system_prompt(ctx: &SystemPromptContext<'_>) -> String {
    let mut env = Environment::new();
    if env
        .add_template("system_prompt", SYSTEM_PROMPT_TEMPLATE)
        .is_err()
    {
        return fallback_system_prompt(ctx);
    }

    let Ok(template) = env.get_template("system_prompt") else {
        return fallback_system_prompt(ctx);
    };

    template
        .render(context! {
            agent_name => ctx.agent_name.trim(),
            description => ctx.description.trim(),
        })
        .map(|rendered| rendered.trim().to_string())
        .unwrap_or_else(|_| fallback_system_prompt(ctx))
}

fn fallback_system_prompt(ctx: &SystemPromptContext<'_>) -> String {
    let mut prompt = "Você é um assistente virtual prestativo.".to_string();

    if !ctx.agent_name.trim().is_empty() {
        prompt.push_str(&format!(
            "\nVocê atende pelo nome \"{}\".",
            ctx.agent_name.trim()
        ));
    }

    if !ctx.description.trim().is_empty() {
        prompt.push_str("\nContexto sobre o seu papel:\n");
        prompt.push_str(ctx.description.trim());
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_generic_prompt_without_agent_details() {
        let prompt = render_default_system_prompt(&SystemPromptContext {
            agent_name: "",
            description: "",
        });
        assert!(prompt.contains("assistente virtual prestativo"));
        assert!(!prompt.contains("atende pelo nome"));
    }

    #[test]
    fn renders_agent_name_and_description_when_present() {
        let prompt = render_default_system_prompt(&SystemPromptContext {
            agent_name: "Clara",
            description: "Atendimento da clínica.",
        });
        assert!(prompt.contains("Clara"));
        assert!(prompt.contains("Atendimento da clínica."));
    }

    #[test]
    fn fallback_matches_template_intent() {
        let prompt = fallback_system_prompt(&SystemPromptContext {
            agent_name: "Clara",
            description: "",
        });
        assert!(prompt.starts_with("Você é um assistente virtual prestativo."));
        assert!(prompt.contains("Clara"));
    }
}
