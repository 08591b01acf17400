mod test_image;
mod test_normalize;
