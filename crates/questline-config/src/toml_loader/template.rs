//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Questline Configuration
# Only override what you want to change -- missing fields use defaults.
# The API key is never read from this file: set MISTRAL_API_KEY instead.

[model]
# Paste your fine-tuned model ID here once the fine-tuning job finishes,
# e.g. "ft:open-mistral-7b:f00b4002:20241120:78b6c5a8".
# id = "open-mistral-7b"
# temperature = 0.7      # 0.0-1.5
# max_tokens = 1024      # 1-32768

[chat]
# system_prompt = "You are an educational choose-your-own-adventure guide. ..."
# connect_timeout_secs = 10     # 1-60
# request_timeout_secs = 120    # 5-600

[dataset]
# min_examples = 8       # 1-1000, the fine-tuning service minimum
"##
    .to_string()
}
