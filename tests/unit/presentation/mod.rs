mod test_resources;
