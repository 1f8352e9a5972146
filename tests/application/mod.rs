mod conversation_service_test;
mod prompt_builder_test;
