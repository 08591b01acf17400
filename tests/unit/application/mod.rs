mod test_client;
mod test_config;
mod test_handlers;
