use std::fmt;
use std::str::FromStr;

/// Pages of the site the configurator can send a visitor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Vision,
    Craft,
    Fit,
    Portfolio,
    Configurator,
    Contact,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Vision => "vision",
            Route::Craft => "craft",
            Route::Fit => "fit",
            Route::Portfolio => "portfolio",
            Route::Configurator => "configurator",
            Route::Contact => "contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Route::Home),
            "vision" => Ok(Route::Vision),
            "craft" => Ok(Route::Craft),
            "fit" => Ok(Route::Fit),
            "portfolio" => Ok(Route::Portfolio),
            "configurator" => Ok(Route::Configurator),
            "contact" => Ok(Route::Contact),
            other => Err(format!("unknown route `{}`", other)),
        }
    }
}

/// The host's client-side router.
///
/// Only the route name is passed; quote context travels through the
/// session handoff slot.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names_round_trip() {
        for route in [
            Route::Home,
            Route::Vision,
            Route::Craft,
            Route::Fit,
            Route::Portfolio,
            Route::Configurator,
            Route::Contact,
        ] {
            assert_eq!(route.as_str().parse::<Route>(), Ok(route));
        }
        assert!("pricing".parse::<Route>().is_err());
    }
}
