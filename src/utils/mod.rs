pub mod output_utils;
#[cfg(test)]
pub mod test_utils;
