mod key_points_test;
