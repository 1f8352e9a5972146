mod conversation_test;
