mod helpers;
mod test_upload;
