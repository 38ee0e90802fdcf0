use pet_registry::PetRecord;

pub fn pet(id: &str, name: &str) -> PetRecord {
    PetRecord::new(id, name, "1", "x")
}

pub fn rex() -> PetRecord {
    PetRecord::new("1", "Rex", "3", "friendly")
}

pub fn milo() -> PetRecord {
    PetRecord::new("2", "Milo", "2", "x")
}

pub fn names(pets: &[PetRecord]) -> Vec<String> {
    pets.iter().map(|pet| pet.name.clone()).collect()
}
