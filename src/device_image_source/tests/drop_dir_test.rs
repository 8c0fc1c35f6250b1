#[cfg(test)]
mod drop_dir_test {
    use crate::device_image_source::impl_drop_dir::is_image_file;
    use std::path::Path;

    #[test]
    fn test_accepts_common_image_extensions() {
        assert!(is_image_file(Path::new("photo.png")));
        assert!(is_image_file(Path::new("photo.jpg")));
        assert!(is_image_file(Path::new("photo.jpeg")));
        assert!(is_image_file(Path::new("photo.webp")));
        assert!(is_image_file(Path::new("dropzone/photo.gif")));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(is_image_file(Path::new("PHOTO.PNG")));
        assert!(is_image_file(Path::new("photo.JPeG")));
    }

    #[test]
    fn test_rejects_non_image_files() {
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("report.pdf")));
        assert!(!is_image_file(Path::new("no_extension")));
        assert!(!is_image_file(Path::new(".hidden")));
    }
}
