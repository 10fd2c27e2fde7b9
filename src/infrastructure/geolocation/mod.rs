pub mod exif_gps;
