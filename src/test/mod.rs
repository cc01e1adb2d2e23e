mod test_search;
mod test_validity;
