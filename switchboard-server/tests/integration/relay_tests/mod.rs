mod test_relay_to_offline_target;
