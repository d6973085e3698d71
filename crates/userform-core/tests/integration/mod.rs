mod edit_flow;
mod submit_flow;
