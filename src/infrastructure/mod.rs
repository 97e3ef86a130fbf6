pub mod bedrock_adapter;
