//! Agent runner with tool calling loop.

use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use crate::backend::{BackendReply, SummaryBackend};
use crate::config::{ModelSettings, Prompts};
use crate::error::{Result, TldwError};
use crate::groq::create_client;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, info};

/// Summarization agent backed by Groq chat completions with tool access.
pub struct GroqAgent {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: f32,
    tools: ToolContext,
    max_iterations: usize,
    system_prompt: String,
}

impl GroqAgent {
    /// Create a new agent from model settings and the given tool context.
    pub fn new(settings: &ModelSettings, prompts: &Prompts, tools: ToolContext) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            model: settings.id.clone(),
            temperature: settings.temperature,
            tools,
            max_iterations: settings.max_iterations,
            system_prompt: prompts.agent.system.clone(),
        })
    }

    /// Run the tool-calling loop for a single task.
    async fn run_loop(&self, task: &str) -> Result<String> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()
                .map_err(|e| TldwError::Agent(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(task.to_string())
                .build()
                .map_err(|e| TldwError::Agent(e.to_string()))?
                .into(),
        ];

        let mut iterations = 0;

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(TldwError::Agent(format!(
                    "Agent exceeded maximum iterations ({})",
                    self.max_iterations
                )));
            }

            debug!("Agent iteration {}", iterations);

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .temperature(self.temperature)
                .messages(messages.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| TldwError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| TldwError::Groq(format!("Agent API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| TldwError::Agent("No response from model".to_string()))?;

            match &choice.message.tool_calls {
                Some(tool_calls) if !tool_calls.is_empty() => {
                    let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                        .tool_calls(tool_calls.clone())
                        .build()
                        .map_err(|e| TldwError::Agent(e.to_string()))?;
                    messages.push(assistant_msg.into());

                    for tool_call in tool_calls {
                        let result = self.execute_tool_call(tool_call).await;

                        let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                            .tool_call_id(&tool_call.id)
                            .content(result)
                            .build()
                            .map_err(|e| TldwError::Agent(e.to_string()))?;
                        messages.push(tool_msg.into());
                    }
                }
                _ => {
                    // No tool calls, the model is done
                    return Ok(choice.message.content.clone().unwrap_or_default());
                }
            }
        }
    }

    /// Execute a single tool call, folding any failure into the result text.
    async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> String {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Agent calling tool: {} with args: {}", name, arguments);

        match parse_tool_call(name, arguments) {
            Ok(tool) => self.tools.execute(&tool).await,
            Err(e) => format!("Failed to parse tool call: {}", e),
        }
    }
}

#[async_trait]
impl SummaryBackend for GroqAgent {
    async fn run(&self, prompt: &str) -> Result<BackendReply> {
        let content = self.run_loop(prompt).await?;
        Ok(BackendReply::Structured { content })
    }
}
