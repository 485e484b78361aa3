
mod state_known_length;
