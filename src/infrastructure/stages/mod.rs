mod stage_provider_factory;

pub use stage_provider_factory::StageProviderFactory;
