mod scene_test;
