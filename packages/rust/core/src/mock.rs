//! Built-in sample projects.
//!
//! Used when no content directory is present yet and the catalog is told
//! to fall back to them (`[catalog] use_mock_when_empty = true`).

use portfolio_shared::ContentRecord;

const UNSPLASH: &str = "https://images.unsplash.com";

/// Every sample image shares one sizing query; tracking parameters are left off.
fn photo(id: &str) -> String {
    format!("{UNSPLASH}/photo-{id}?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080")
}

fn project(
    slug: &str,
    title: &str,
    location: &str,
    main: &str,
    extra: [&str; 2],
    description: &str,
) -> ContentRecord {
    ContentRecord {
        title: title.into(),
        location: location.into(),
        main_image: photo(main),
        description: description.into(),
        ..ContentRecord::new(slug)
    }
    .with_supplementary_images(extra.map(photo))
}

/// The sample project set, in display order.
pub fn projects() -> Vec<ContentRecord> {
    vec![
        project(
            "de-poorten",
            "De Poorten",
            "Stam, Gent",
            "1568515387631-8b650bbcdb90",
            ["1582555172866-f73bb12a2ab3", "1763451161513-33d61eb02bfd"],
            "Een reeks toegangspoorten voor het stadsmuseum.\n\n\
             De panelen begeleiden bezoekers van de straat naar de tentoonstelling.\n\n\
             Elke poort vertelt een hoofdstuk uit de geschiedenis van de stad.",
        ),
        project(
            "visserijmuseum",
            "Visserijmuseum",
            "Oostduinkerke",
            "1647792845543-a8032c59cbdf",
            ["1582555172866-f73bb12a2ab3", "1763451161513-33d61eb02bfd"],
            "Een modern museum gewijd aan de rijke visserijtraditie van de Belgische kust.",
        ),
        project(
            "cultuurcentrum-leuven",
            "Cultuurcentrum",
            "Leuven",
            "1762780087351-703502cdb85a",
            ["1747320735590-cf0571c39c69", "1764079146323-6971a89aee47"],
            "Een modern cultuurcentrum met een veelzijdig programma. Het gebouw combineert \
             hedendaagse architectuur met functionele tentoonstellingsruimtes.",
        ),
        project(
            "mas-antwerpen",
            "Museum aan de Stroom",
            "Antwerpen",
            "1737642256355-af3ecc10c5da",
            ["1654911443323-bc4f32eaf68b", "1582555172866-f73bb12a2ab3"],
            "Het MAS vertelt het verhaal van Antwerpen en de haven door innovatieve tentoonstellingen.",
        ),
        project(
            "erfgoedcentrum-brugge",
            "Erfgoedcentrum",
            "Brugge",
            "1649294528168-8b60bd65069e",
            ["1764079146323-6971a89aee47", "1763451161513-33d61eb02bfd"],
            "Een gerestaureerd historisch pand dat nu dienst doet als erfgoedcentrum.",
        ),
        project(
            "kunstgalerij-mechelen",
            "Kunstgalerij",
            "Mechelen",
            "1647628790522-d2716f6fcc61",
            ["1747320735590-cf0571c39c69", "1647792845543-a8032c59cbdf"],
            "Een eigentijdse kunstgalerij met wisselende tentoonstellingen van nationale en \
             internationale kunstenaars.",
        ),
        project(
            "aquarium-blankenberge",
            "Aquarium",
            "Blankenberge",
            "1749563426420-6068c4e1da14",
            ["1568515387631-8b650bbcdb90", "1654911443323-bc4f32eaf68b"],
            "Een fascinerend aquarium dat de onderwaterwereld van de Noordzee en tropische \
             zeeën toont.",
        ),
        project(
            "maritiem-museum-nieuwpoort",
            "Maritiem Museum",
            "Nieuwpoort",
            "1762846700605-f4ec53a1146d",
            ["1582555172866-f73bb12a2ab3", "1763451161513-33d61eb02bfd"],
            "Het Maritiem Museum vertelt het verhaal van de visserij en scheepvaart aan de \
             Belgische kust.",
        ),
    ]
}
