use realty_config::Config;
use realty_models::contact::ContactLinks;

pub fn contact(config: &Config) {
    let contact = &config.contact;
    let links = ContactLinks::new(&contact.phone, &contact.whatsapp);

    println!("{}", contact.company);
    println!("phone:    {}", contact.phone);
    println!("email:    {}", contact.email);
    println!("call:     {}", links.call);
    println!("whatsapp: {}", links.whatsapp);
}
