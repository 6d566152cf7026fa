use std::path::Path;
use image::GenericImageView;
use crate::error::LoaderError;

/// Confirms the downloaded payload decodes as an image. The format is
/// guessed from the payload itself, not the file extension.
pub async fn validate(path: &Path) -> crate::error::Result<()> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(_e) => {
            return Err(LoaderError::FileOpen);
        }
    };

    match image::load_from_memory(&bytes) {
        Ok(image) => {
            let (width, height) = image.dimensions();
            tracing::debug!("decoded image {}x{}", width, height);
            Ok(())
        }
        Err(e) => Err(LoaderError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use crate::error::LoaderError;
    use crate::image_verify;

    #[tokio::test]
    async fn test_validate_png() {
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2))
            .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();

        let path = std::env::temp_dir().join("image_loader_rs_verify_ok.png");
        std::fs::write(&path, &buffer).unwrap();

        assert!(image_verify::validate(&path).await.is_ok());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_validate_rejects_non_image() {
        let path = std::env::temp_dir().join("image_loader_rs_verify_bad.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = image_verify::validate(&path).await;
        assert!(matches!(result, Err(LoaderError::Decode(_))));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_validate_missing_file() {
        let path = std::env::temp_dir().join("image_loader_rs_verify_missing.png");
        let result = image_verify::validate(&path).await;
        assert_eq!(result, Err(LoaderError::FileOpen));
    }
}
