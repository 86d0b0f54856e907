mod common;
mod test_error;

mod application {
    mod test_auth;
    mod test_client;
    mod test_http_client;
}

mod model {
    mod test_config;
    mod test_gaql;
    mod test_requests;
    mod test_responses;
}

mod presentation {
    mod test_campaign;
    mod test_update;
}

mod utils {
    mod test_finance;
}
