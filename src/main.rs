use extracurricular::{activities, orquestrator::ServicesOrquestrator, service::Service};

fn main() -> Result<(), std::io::Error> {
    ServicesOrquestrator::default()
        .load_environment_variables()
        .set_config_from_env()
        .init_tracing()
        .add_service(Service::api("API_", activities::routes))
        .run()
}
