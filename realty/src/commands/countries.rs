use clap::Args;
use realty_form::CountrySelect;

#[derive(Debug, Args)]
pub struct CountriesCommand {
    /// Only list countries whose name or ISO code contains this text
    query: Option<String>,
}

impl CountriesCommand {
    pub fn invoke(self) {
        let mut select = CountrySelect::default();
        select.set_query(self.query.unwrap_or_default());

        for country in select.options() {
            println!(
                "{}  +{:<4} {}",
                country.iso_code(),
                country.calling_code(),
                country.name()
            );
        }
    }
}
