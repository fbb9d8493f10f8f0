use fitcoach_domain as domain;

pub static TEMPLATE: std::sync::LazyLock<domain::Template> =
    std::sync::LazyLock::new(|| domain::Template {
        id: "t1".into(),
        title: "Full body A".to_string(),
        description: "Lunedì".to_string(),
        assignments: vec![
            domain::StoredAssignment {
                exercise_id: "squat".into(),
                sets: 5,
                reps: 5,
                load: Some(100.0),
            },
            domain::StoredAssignment {
                exercise_id: "plank".into(),
                sets: 3,
                reps: 60,
                load: None,
            },
        ],
    });

pub static NEW_TEMPLATE: std::sync::LazyLock<domain::NewTemplate> =
    std::sync::LazyLock::new(|| domain::NewTemplate {
        title: domain::Title::new("Full body A (copia)").unwrap(),
        description: "Lunedì".to_string(),
        assignments: vec![
            domain::ExerciseAssignment {
                exercise_id: "x".into(),
                sets: domain::Sets::new(3).unwrap(),
                reps: domain::Reps::new(10).unwrap(),
                load: None,
            },
            domain::ExerciseAssignment {
                exercise_id: "y".into(),
                sets: domain::Sets::new(4).unwrap(),
                reps: domain::Reps::new(8).unwrap(),
                load: Some(domain::Load::new(22.5).unwrap()),
            },
        ],
    });

pub static EXERCISES: std::sync::LazyLock<Vec<domain::Exercise>> =
    std::sync::LazyLock::new(|| vec![EXERCISE.clone(), EXERCISE_2.clone()]);

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "squat".into(),
        name: "Squat".to_string(),
        description: "Accosciata con bilanciere".to_string(),
        category: "Gambe".to_string(),
        image_url: Some("/uploads/squat.png".to_string()),
        muscles: vec!["quadricipiti".to_string(), "glutei".to_string()],
        difficulty: "intermedio".to_string(),
        equipment: "bilanciere".to_string(),
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "plank".into(),
        name: "Plank".to_string(),
        category: "Core".to_string(),
        ..domain::Exercise::default()
    });

pub static COACH: std::sync::LazyLock<domain::Coach> =
    std::sync::LazyLock::new(|| domain::Coach {
        id: "c1".into(),
        name: "Luca".to_string(),
    });
