mod test_memory_store;
