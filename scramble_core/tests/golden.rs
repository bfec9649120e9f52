use pretty_assertions::assert_eq;
use scramble_core::{
    Direction, GeneratorConfig, Move, ScrambleError, ScrambleGenerator, ScriptedSource,
    Vocabulary,
};

fn rendered(entries: &scramble_core::Scramble) -> Vec<(String, String, &'static str)> {
    entries
        .iter()
        .map(|entry| {
            (
                entry.symbol().to_owned(),
                entry.direction().to_string(),
                entry.annotation(),
            )
        })
        .collect()
}

#[test_log::test]
fn standard_vocabulary_golden() {
    // U, 'U (cancels U), R, R (doubles), R (third time is redrawn), 'F, Z
    let rng = ScriptedSource::new(
        vec![0, 0, 2, 2, 2, 4, 14],
        vec![false, true, false, false, false, true, false],
    );
    let mut generator =
        ScrambleGenerator::new(Vocabulary::standard(), GeneratorConfig::default(), rng).unwrap();

    let scramble = generator.generate(5).unwrap();

    assert_eq!(scramble.slots(), 5);
    assert_eq!(
        rendered(&scramble),
        vec![
            ("U".to_owned(), "←".to_owned(), ""),
            ("R".to_owned(), "↑".to_owned(), "2x "),
            ("'F".to_owned(), "CCW".to_owned(), ""),
            ("Z".to_owned(), "CW".to_owned(), ""),
        ]
    );
    assert_eq!(scramble.to_string(), "U 2x R 'F Z");
}

#[test_log::test]
fn single_move() {
    let rng = ScriptedSource::new(vec![16], vec![true]);
    let mut generator =
        ScrambleGenerator::new(Vocabulary::standard(), GeneratorConfig::default(), rng).unwrap();

    let scramble = generator.generate(1).unwrap();

    assert_eq!(scramble.slots(), 1);
    assert_eq!(scramble.entries().len(), 1);
    assert_eq!(*scramble.entries()[0].move_(), Move::new("'E", Direction::Left));
}

#[test_log::test]
fn popping_returns_newest_first() {
    let rng = ScriptedSource::new(vec![0, 1, 2], vec![false]);
    let mut generator =
        ScrambleGenerator::new(Vocabulary::standard(), GeneratorConfig::default(), rng).unwrap();

    let mut scramble = generator.generate(3).unwrap();

    assert_eq!(scramble.pop().unwrap().symbol(), "R");
    assert_eq!(scramble.pop().unwrap().symbol(), "D");
    assert_eq!(scramble.pop().unwrap().symbol(), "U");
    assert!(scramble.is_empty());
}

#[test_log::test]
fn third_repeat_exhausts_single_move_vocabulary() {
    let vocabulary = Vocabulary::new(vec![Move::new("A", Direction::Left)]).unwrap();
    let mut rng = ScriptedSource::new(vec![0], vec![false]);
    let mut generator =
        ScrambleGenerator::new(&vocabulary, GeneratorConfig::default(), &mut rng).unwrap();

    assert_eq!(
        generator.generate(3),
        Err(ScrambleError::GenerationExhausted {
            slot: 3,
            attempts: 100
        })
    );
    drop(generator);
    // One draw each for the first two slots, then the whole budget for the third
    assert_eq!(rng.draws(), 102);
}

#[test_log::test]
fn doubling_fits_in_two_slots() {
    let vocabulary = Vocabulary::new(vec![Move::new("A", Direction::Left)]).unwrap();
    let rng = ScriptedSource::new(vec![0], vec![false]);
    let mut generator =
        ScrambleGenerator::new(&vocabulary, GeneratorConfig::default(), rng).unwrap();

    let scramble = generator.generate(2).unwrap();

    assert_eq!(scramble.slots(), 2);
    assert_eq!(scramble.len(), 1);
    assert_eq!(scramble.to_string(), "2x A");
}

#[test_log::test]
fn forced_reversal_exhausts_retries() {
    let a = Move::new("A", Direction::Left);
    let vocabulary = Vocabulary::new(vec![a.clone(), a.reversed()]).unwrap();
    let rng = ScriptedSource::new(vec![0, 1], vec![false]);
    let mut generator = ScrambleGenerator::new(
        &vocabulary,
        GeneratorConfig { max_attempts: 7 },
        rng,
    )
    .unwrap();

    assert_eq!(
        generator.generate(2),
        Err(ScrambleError::GenerationExhausted {
            slot: 2,
            attempts: 7
        })
    );
}

#[test_log::test]
fn invalid_configuration() {
    let rng = ScriptedSource::new(vec![0], vec![false]);
    assert!(matches!(
        ScrambleGenerator::new(
            Vocabulary::standard(),
            GeneratorConfig { max_attempts: 0 },
            rng.clone()
        ),
        Err(ScrambleError::InvalidConfiguration(_))
    ));

    let mut generator =
        ScrambleGenerator::new(Vocabulary::standard(), GeneratorConfig::default(), rng).unwrap();
    assert!(matches!(
        generator.generate(0),
        Err(ScrambleError::InvalidConfiguration(_))
    ));
}
