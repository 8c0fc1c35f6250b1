mod disposal_test;
mod mapper_test;
