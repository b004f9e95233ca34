mod test_concurrent_host_attach;
mod test_concurrent_room_creation;
mod test_host_reattach_after_close;
