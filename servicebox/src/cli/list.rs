//! --list output

use crate::registry::ServiceRegistry;

/// Tab separated table of the registry.
pub fn render(registry: &ServiceRegistry) -> String {
    let mut out = String::from("NAME\tSTARTUP_DELAY\tROUTES\n");
    for def in registry.iter() {
        let routes: Vec<&str> = def.routes.iter().map(|r| r.path.as_str()).collect();
        out.push_str(&format!(
            "{}\t{}s\t{}\n",
            def.name,
            def.default_startup_delay.as_secs(),
            routes.join(",")
        ));
    }
    out
}

/// Print the registry to stdout.
pub fn execute(registry: &ServiceRegistry) {
    print!("{}", render(registry));
}
