use crate::models::Quote;

/// The fixed collection served by the API, in display order
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            1,
            "La vie est une fleur dont l'amour est le miel.",
            Some("Victor Hugo"),
            Some("Amour"),
        ),
        Quote::new(
            2,
            "Le succès n'est pas la clé du bonheur. Le bonheur est la clé du succès.",
            Some("Albert Schweitzer"),
            Some("Succès"),
        ),
        Quote::new(
            3,
            "La seule façon de faire un travail formidable est d'aimer ce que vous faites.",
            Some("Steve Jobs"),
            Some("Travail"),
        ),
        Quote::new(
            4,
            "L'avenir appartient à ceux qui croient à la beauté de leurs rêves.",
            Some("Eleanor Roosevelt"),
            Some("Rêves"),
        ),
        Quote::new(
            5,
            "La seule vraie sagesse est de savoir que l'on ne sait rien.",
            Some("Socrate"),
            Some("Sagesse"),
        ),
        Quote::new(
            6,
            "La vie est trop courte pour boire du mauvais vin.",
            Some("Proverbe français"),
            Some("Plaisir"),
        ),
        Quote::new(
            7,
            "Dans la vie, il n'y a pas de solutions. Il y a des forces en marche.",
            Some("Albert Camus"),
            Some("Philosophie"),
        ),
        Quote::new(
            8,
            "L'homme n'est rien d'autre que ce qu'il fait de lui-même.",
            Some("Jean-Paul Sartre"),
            Some("Existentialisme"),
        ),
        Quote::new(
            9,
            "La liberté consiste à pouvoir faire tout ce qui ne nuit pas à autrui.",
            Some("Déclaration des Droits de l'Homme"),
            Some("Liberté"),
        ),
        Quote::new(
            10,
            "L'imagination est plus importante que le savoir.",
            Some("Albert Einstein"),
            Some("Créativité"),
        ),
    ]
}
