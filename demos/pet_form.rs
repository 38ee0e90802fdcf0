use pet_registry::{PetForm, PetStore, RegistryEvent, SubmitOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pet_registry=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One store for the whole app; every view gets a clone.
    let store = PetStore::new();
    let mut form_repo = store.clone();

    store.on(RegistryEvent::ADDED, |payload| {
        if let Ok(RegistryEvent::PetAdded(pet)) = RegistryEvent::decode(&payload) {
            println!("added: {} ({})", pet.name, pet.id);
        }
    })?;

    let mut form = PetForm::new();
    println!("{}", form.title());
    form.set_name("Rex");
    form.set_age("3");
    form.set_description("friendly");
    form.select_species("Dog");
    form.select_breed("Pug");
    report(form.submit(&mut form_repo));

    form.set_name("rex");
    form.set_age("1");
    form.set_description("another one");
    report(form.submit(&mut form_repo));
    form.set_name("Milo");
    report(form.submit(&mut form_repo));

    if let Some(rex) = store.search("rex")?.into_iter().next() {
        form.begin_edit(&rex);
        println!("{}", form.title());
        form.set_age("4");
        form.set_description("older now");
        report(form.submit(&mut form_repo));
    }

    for pet in PetForm::visible_pets(&store, "") {
        println!("{} | age {} | {}", pet.name, pet.age, pet.description);
    }

    Ok(())
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Added(id) => println!("saved new pet {id}"),
        SubmitOutcome::Updated(id) => println!("updated pet {id}"),
        SubmitOutcome::Rejected(message) => println!("rejected: {message}"),
        SubmitOutcome::Invalid(errors) => println!("invalid: {errors:?}"),
    }
}
