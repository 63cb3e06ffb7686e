pub mod video_dir;
