mod catalog;
mod time_slot;
