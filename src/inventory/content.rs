//! Descriptive copy for each trait domain and its six facets.

use super::Domain;

#[derive(Debug, Clone, Copy)]
pub struct Facet {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TraitDetail {
    pub domain: Domain,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub full_desc: &'static str,
    pub facets: [Facet; 6],
}

const fn facet(name: &'static str, description: &'static str) -> Facet {
    Facet { name, description }
}

/// One-line summary shown next to a domain score.
pub fn domain_description(domain: Domain) -> &'static str {
    match domain {
        Domain::Openness => {
            "Openness to experience: curiosity, creativity, and willingness to try new things."
        }
        Domain::Conscientiousness => {
            "Conscientiousness: tendency to be organized, dependable, and disciplined."
        }
        Domain::Extraversion => {
            "Extraversion: sociability, assertiveness, and emotional expressiveness."
        }
        Domain::Agreeableness => "Agreeableness: kindness, empathy, and cooperativeness.",
        Domain::Neuroticism => {
            "Neuroticism: emotional stability vs. sensitivity to stress and anxiety."
        }
    }
}

pub fn trait_detail(domain: Domain) -> &'static TraitDetail {
    match domain {
        Domain::Openness => &OPENNESS,
        Domain::Conscientiousness => &CONSCIENTIOUSNESS,
        Domain::Extraversion => &EXTRAVERSION,
        Domain::Agreeableness => &AGREEABLENESS,
        Domain::Neuroticism => &NEUROTICISM,
    }
}

static NEUROTICISM: TraitDetail = TraitDetail {
    domain: Domain::Neuroticism,
    title: "Neuroticism",
    short_desc: "The tendency to experience negative feelings.",
    full_desc: "Neuroticism refers to the tendency to experience negative feelings. People who are high in Neuroticism may feel that something dangerous is about to happen and tend to experience intense emotions. Low scorers are generally calm, composed, and unflappable.",
    facets: [
        facet("Anxiety", "The 'fight-or-flight' system. High scorers often feel like something dangerous is about to happen."),
        facet("Anger", "The tendency to feel enraged or resentful when things do not go one's way."),
        facet("Depression", "The tendency to feel sad, dejected, and discouraged."),
        facet("Self-Consciousness", "Sensitivity about what others think; concern about rejection and ridicule."),
        facet("Immoderation", "Difficulty resisting strong cravings and urges; orientation toward short-term pleasures."),
        facet("Vulnerability", "Experience of panic, confusion, and helplessness when under pressure."),
    ],
};

static EXTRAVERSION: TraitDetail = TraitDetail {
    domain: Domain::Extraversion,
    title: "Extraversion",
    short_desc: "Marked by pronounced engagement with the external world.",
    full_desc: "Extraversion is marked by pronounced engagement with the external world. High scorers are sociable, outgoing, energetic, and lively. They enjoy being around people. Low scorers (introverts) need less stimulation and more privacy.",
    facets: [
        facet("Friendliness", "Genuinely liking other people and openly demonstrating positive feelings."),
        facet("Gregariousness", "Finding the company of others pleasantly stimulating and rewarding."),
        facet("Assertiveness", "Liking to speak out, take charge, and direct the activities of others."),
        facet("Activity Level", "Leading fast-paced, busy lives; moving about quickly and vigorously."),
        facet("Excitement-Seeking", "Easily bored without high levels of stimulation; taking risks and seeking thrills."),
        facet("Cheerfulness", "Experience of positive mood and feelings like happiness, enthusiasm, and joy."),
    ],
};

static OPENNESS: TraitDetail = TraitDetail {
    domain: Domain::Openness,
    title: "Openness to Experience",
    short_desc: "Distinguishes imaginative, creative people from conventional people.",
    full_desc: "Openness to Experience describes a dimension of cognitive style that distinguishes imaginative, creative people from down-to-earth, conventional people. High scorers enjoy novelty, variety, and change. Low scorers prefer plain, straightforward, and obvious things.",
    facets: [
        facet("Imagination", "Using fantasy as a way of creating a richer, more interesting world."),
        facet("Artistic Interests", "Appreciation of natural and artificial beauty and absorption in artistic events."),
        facet("Emotionality", "Good access to and awareness of one's own feelings."),
        facet("Adventurousness", "Eagerness to try new activities, travel, and experience different things."),
        facet("Intellect", "Love of playing with ideas and open-mindedness to new and unusual concepts."),
        facet("Liberalism", "Readiness to challenge authority, convention, and traditional values."),
    ],
};

static AGREEABLENESS: TraitDetail = TraitDetail {
    domain: Domain::Agreeableness,
    title: "Agreeableness",
    short_desc: "Concern with cooperation and social harmony.",
    full_desc: "Agreeableness reflects individual differences in concern with cooperation and social harmony. Agreeable individuals value getting along with others and are generally considerate, kind, generous, trusting, and trustworthy.",
    facets: [
        facet("Trust", "Assuming that most people are fair, honest, and have good intentions."),
        facet("Morality", "Seeing no need for pretense or manipulation; being candid, frank, and sincere."),
        facet("Altruism", "Finding helping other people genuinely rewarding and self-fulfilling."),
        facet("Cooperation", "Disliking confrontations and being willing to compromise."),
        facet("Modesty", "Disliking claiming superiority over others; humble."),
        facet("Sympathy", "Being tenderhearted, compassionate, and easily moved to pity."),
    ],
};

static CONSCIENTIOUSNESS: TraitDetail = TraitDetail {
    domain: Domain::Conscientiousness,
    title: "Conscientiousness",
    short_desc: "The way in which we control, regulate, and direct our impulses.",
    full_desc: "Conscientiousness concerns the way in which we control, regulate, and direct our impulses. High scorers set clear goals and pursue them with determination. They are regarded as reliable and hard-working.",
    facets: [
        facet("Self-Efficacy", "Confidence in one's ability to accomplish things."),
        facet("Orderliness", "Being well-organized, keeping lists, and living according to schedules."),
        facet("Dutifulness", "A strong sense of moral obligation and duty."),
        facet("Achievement-Striving", "Striving hard to achieve excellence and recognition."),
        facet("Self-Discipline", "The ability to persist at difficult or unpleasant tasks until completion."),
        facet("Cautiousness", "The disposition to think through possibilities and consequences before acting."),
    ],
};
