use super::*;

mod animation;
mod dialog;
mod forms;
mod nav;
mod timers;
