use log::{info,error,LevelFilter};
use pico_args::Arguments;

use randsphere::{
    common::*,
    config::{Config,Loadable},
    selftest
};

fn main()->Res<()> {
    let mut args = Arguments::from_env();
    let level = if args.contains(["-v","--verbose"]) { LevelFilter::Debug } else { LevelFilter::Info };
    simple_logger::SimpleLogger::new().with_level(level).env().init()?;

    let res = main0(args);
    if let Err(e) = &res {
	error!("{}",e);
    }

    res
}

fn main0(mut args:Arguments)->Res<()> {
    let config_fn : Option<String> = args.opt_value_from_str("--config")?;
    let seed : Option<u64> = args.opt_value_from_str("--seed")?;
    let samples : Option<usize> = args.opt_value_from_str("--samples")?;
    let rest = args.finish();
    if !rest.is_empty() {
	return Err(error(&format!("Unexpected arguments: {:?}",rest)));
    }

    let mut config = match config_fn {
	Some(path) => {
	    info!("Loading configuration from {}",path);
	    Config::load(&path)?
	},
	None => Config::default()
    };
    if seed.is_some() {
	config.seed = seed;
    }
    if let Some(n) = samples {
	config.samples = n;
    }
    config.validate()?;
    info!("Generator {:?}, seed {:?}, {} samples per statistical check",
	  config.generator,
	  config.seed,
	  config.samples);

    let outcomes = selftest::run(&config);
    let mut n_failed = 0;
    for o in outcomes.iter() {
	if o.passed {
	    info!("PASS {:20} {}",o.name,o.detail);
	} else {
	    n_failed += 1;
	    error!("FAIL {:20} {}",o.name,o.detail);
	}
    }
    info!("{} of {} checks passed",outcomes.len() - n_failed,outcomes.len());

    if n_failed > 0 {
	return Err(error(&format!("{} checks failed",n_failed)));
    }
    Ok(())
}
