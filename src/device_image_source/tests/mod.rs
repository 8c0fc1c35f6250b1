mod drop_dir_test;
