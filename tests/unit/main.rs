mod render;
mod storage;
mod test_error;
