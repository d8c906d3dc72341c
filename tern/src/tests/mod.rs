

// Dispatch tests
mod operations;
