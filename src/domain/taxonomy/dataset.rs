//! Embedded cognitive bias taxonomy.
//!
//! Adapted from Buster Benson's cognitive bias cheat sheet
//! (https://github.com/busterbenson/public/blob/master/cognitive-bias-cheat-sheet.json).
//! Order is significant: the daily selection indexes into the flattened
//! list, so reordering entries changes which bias a given day shows.

use super::model::{Bias, Category, Rationale};

pub(super) const COGNITIVE_BIASES: &[Category] = &[
    Category {
        name: "1. Too Much Information",
        rationales: &[
            Rationale {
                name: "We notice things already primed in memory or repeated often.",
                biases: &[
                    Bias::new("Availability heuristic"),
                    Bias::new("Attentional bias"),
                    Bias::new("Illusory truth effect"),
                    Bias::new("Mere exposure effect"),
                    Bias::new("Context effect"),
                    Bias::new("Cue-dependent forgetting"),
                    Bias::new("Mood-congruent memory bias"),
                    Bias::new("Frequency illusion"),
                    Bias::new("Baader-Meinhof Phenomenon"),
                    Bias::new("Empathy gap"),
                    Bias::new("Omission bias"),
                    Bias::new("Base rate fallacy"),
                ],
            },
            Rationale {
                name:
                    "Bizarre/funny/visually-striking/anthropomorphic things stick out more than non-bizarre/unfunny things.",
                biases: &[
                    Bias::new("Bizarreness effect"),
                    Bias::new("Humor effect"),
                    Bias::new("Von Restorff effect"),
                    Bias::new("Picture superiority effect"),
                    Bias::new("Self-relevance effect"),
                    Bias::new("Negativity bias"),
                ],
            },
            Rationale {
                name: "We notice when something has changed.",
                biases: &[
                    Bias::new("Anchoring"),
                    Bias::new("Conservatism"),
                    Bias::new("Contrast effect"),
                    Bias::new("Distinction bias"),
                    Bias::new("Focusing effect"),
                    Bias::new("Framing effect"),
                    Bias::new("Money illusion"),
                    Bias::new("Weber–Fechner law"),
                ],
            },
            Rationale {
                name: "We are drawn to details that confirm our own existing beliefs",
                biases: &[
                    Bias::new("Confirmation bias"),
                    Bias::new("Congruence bias"),
                    Bias::new("Post-purchase rationalization"),
                    Bias::new("Choice-supportive bias"),
                    Bias::new("Selective perception"),
                    Bias::new("Observer-expectancy effect"),
                    Bias::new("Experimenter's bias"),
                    Bias::new("Observer effect"),
                    Bias::new("Expectation bias"),
                    Bias::new("Ostrich effect"),
                    Bias::new("Subjective validation"),
                    Bias::new("Continued influence effect"),
                    Bias::new("Semmelweis reflex"),
                ],
            },
            Rationale {
                name: "We notice flaws in others more easily than flaws in ourselves.",
                biases: &[
                    Bias::new("Bias blind spot"),
                    Bias::new("Naïve cynicism"),
                    Bias::new("Naïve realism"),
                ],
            },
        ],
    },
    Category {
        name: "2. Not Enough Meaning",
        rationales: &[
            Rationale {
                name: "We find stories and patterns even in sparse data",
                biases: &[
                    Bias::new("Confabulation"),
                    Bias::new("Clustering illusion"),
                    Bias::new("Insensitivity to sample size"),
                    Bias::new("Neglect of probability"),
                    Bias::new("Anecdotal fallacy"),
                    Bias::new("Illusion of validity"),
                    Bias::new("Masked man fallacy"),
                    Bias::new("Recency illusion"),
                    Bias::new("Gambler's fallacy"),
                    Bias::new("Hot-hand fallacy"),
                    Bias::new("Illusory correlation"),
                    Bias::new("Pareidolia"),
                    Bias::new("Anthropomorphism"),
                ],
            },
            Rationale {
                name:
                    "We fill in characteristics from stereotypes, generalities, and prior histories",
                biases: &[
                    Bias::new("Group attribution error"),
                    Bias::new("Ultimate attribution error"),
                    Bias::new("Stereotyping"),
                    Bias::new("Essentialism"),
                    Bias::new("Functional fixedness"),
                    Bias::new("Moral credential effect"),
                    Bias::new("Just-world hypothesis"),
                    Bias::new("Argument from fallacy"),
                    Bias::new("Authority bias"),
                    Bias::new("Automation bias"),
                    Bias::new("Bandwagon effect"),
                    Bias::new("Placebo effect"),
                ],
            },
            Rationale {
                name: "We imagine things and people we're familiar with or fond of as better",
                biases: &[
                    Bias::new("Out-group homogeneity bias"),
                    Bias::new("Cross-race effect"),
                    Bias::new("In-group bias"),
                    Bias::new("Halo effect"),
                    Bias::new("Cheerleader effect"),
                    Bias::new("Positivity effect"),
                    Bias::new("Not invented here"),
                    Bias::new("Reactive devaluation"),
                    Bias::new("Well-traveled road effect"),
                ],
            },
            Rationale {
                name: "We simplify probabilities and numbers to make them easier to think about",
                biases: &[
                    Bias::new("Mental accounting"),
                    Bias::new("Appeal to probability fallacy"),
                    Bias::new("Normalcy bias"),
                    Bias::new("Murphy's Law"),
                    Bias::new("Zero sum bias"),
                    Bias::new("Survivorship bias"),
                    Bias::new("Subadditivity effect"),
                    Bias::new("Denomination effect"),
                    Bias::new("Magic number 7+-2"),
                ],
            },
            Rationale {
                name: "We think we know what other people are thinking",
                biases: &[
                    Bias::new("Illusion of transparency"),
                    Bias::new("Curse of knowledge"),
                    Bias::new("Spotlight effect"),
                    Bias::new("Extrinsic incentive error"),
                    Bias::new("Illusion of external agency"),
                    Bias::new("Illusion of asymmetric insight"),
                ],
            },
            Rationale {
                name: "We project our current mindset and assumptions onto the past and future",
                biases: &[
                    Bias::new("Telescoping effect"),
                    Bias::new("Rosy retrospection"),
                    Bias::new("Hindsight bias"),
                    Bias::new("Outcome bias"),
                    Bias::new("Moral luck"),
                    Bias::new("Declinism"),
                    Bias::new("Impact bias"),
                    Bias::new("Pessimism bias"),
                    Bias::new("Planning fallacy"),
                    Bias::new("Time-saving bias"),
                    Bias::new("Pro-innovation bias"),
                    Bias::new("Projection bias"),
                    Bias::new("Restraint bias"),
                    Bias::new("Self-consistency bias"),
                ],
            },
        ],
    },
    Category {
        name: "3. Need To Act Fast",
        rationales: &[
            Rationale {
                name:
                    "To act, we must be confident we can make an impact and feel what we do is important",
                biases: &[
                    Bias::new("Overconfidence effect"),
                    Bias::new("Social desirability bias"),
                    Bias::new("Third-person effect"),
                    Bias::new("False consensus effect"),
                    Bias::new("Hard-easy effect"),
                    Bias::new("Lake Wobegone effect"),
                    Bias::new("Dunning-Kruger effect"),
                    Bias::new("Egocentric bias"),
                    Bias::new("Optimism bias"),
                    Bias::new("Forer effect"),
                    Bias::new("Barnum effect"),
                    Bias::new("Self-serving bias"),
                    Bias::new("Actor-observer bias"),
                    Bias::new("Illusion of control"),
                    Bias::new("Illusory superiority"),
                    Bias::new("Fundamental attribution error"),
                    Bias::new("Defensive attribution hypothesis"),
                    Bias::new("Trait ascription bias"),
                    Bias::new("Effort justification"),
                    Bias::new("Risk compensation"),
                    Bias::new("Peltzman effect"),
                ],
            },
            Rationale {
                name: "To stay focused, we favor the immediate, relatable thing in front of us",
                biases: &[
                    Bias::new("Hyperbolic discounting"),
                    Bias::new("Appeal to novelty"),
                    Bias::new("Identifiable victim effect"),
                ],
            },
            Rationale {
                name:
                    "To get anything done, we tend to complete things we've invested time & energy in.",
                biases: &[
                    Bias::new("Sunk cost fallacy"),
                    Bias::new("Irrational escalation"),
                    Bias::new("Escalation of commitment"),
                    Bias::new("Generation effect"),
                    Bias::new("Loss aversion"),
                    Bias::new("IKEA effect"),
                    Bias::new("Unit bias"),
                    Bias::new("Zero-risk bias"),
                    Bias::new("Disposition effect"),
                    Bias::new("Pseudocertainty effect"),
                    Bias::new("Processing difficulty effect"),
                    Bias::new("Endowment effect"),
                    Bias::new("Backfire effect"),
                ],
            },
            Rationale {
                name:
                    "To avoid mistakes, we tend to preserve our autonomy and group status, and avoid irreversible decisions.",
                biases: &[
                    Bias::new("System justification"),
                    Bias::new("Reverse psychology"),
                    Bias::new("Reactance"),
                    Bias::new("Decoy effect"),
                    Bias::new("Social comparison bias"),
                    Bias::new("Status quo bias"),
                ],
            },
            Rationale {
                name:
                    "We favor options that appear simple or have more complete information over more complex, ambiguous options.",
                biases: &[
                    Bias::new("Ambiguity bias"),
                    Bias::new("Information bias"),
                    Bias::new("Belief bias"),
                    Bias::new("Rhyme as reason effect"),
                    Bias::new("Bike-shedding effect"),
                    Bias::new("Law of Triviality"),
                    Bias::new("Delmore effect"),
                    Bias::new("Conjunction fallacy"),
                    Bias::new("Occam's razor"),
                    Bias::new("Less-is-better effect"),
                ],
            },
        ],
    },
    Category {
        name: "4. What Should We Remember?",
        rationales: &[
            Rationale {
                name: "We edit and reinforce some memories after the fact",
                biases: &[
                    Bias::new("Misattribution of memory"),
                    Bias::new("Source confusion"),
                    Bias::new("Cryptomnesia"),
                    Bias::new("False memory"),
                    Bias::new("Suggestibility"),
                    Bias::new("Spacing effect"),
                ],
            },
            Rationale {
                name: "We discard specifics to form generalities",
                biases: &[
                    Bias::new("Implicit associations"),
                    Bias::new("Implicit stereotypes"),
                    Bias::new("Stereotypical bias"),
                    Bias::new("Prejudice"),
                    Bias::new("Negativity bias"),
                    Bias::new("Fading affect bias"),
                ],
            },
            Rationale {
                name: "We reduce events and lists to their key elements",
                biases: &[
                    Bias::new("Peak–end rule"),
                    Bias::new("Leveling and sharpening"),
                    Bias::new("Misinformation effect"),
                    Bias::new("Serial recall effect"),
                    Bias::new("List-length effect"),
                    Bias::new("Duration neglect"),
                    Bias::new("Modality effect"),
                    Bias::new("Memory inhibition"),
                    Bias::new("Primacy effect"),
                    Bias::new("Recency effect"),
                    Bias::new("Part-list cueing effect"),
                    Bias::new("Serial position effect"),
                    Bias::new("Suffix effect"),
                ],
            },
            Rationale {
                name: "We store memories differently based on how they were experienced",
                biases: &[
                    Bias::new("Levels of processing effect"),
                    Bias::new("Absent-mindedness"),
                    Bias::new("Testing effect"),
                    Bias::new("Next-in-line effect"),
                    Bias::new("Google effect"),
                    Bias::new("Tip of the tongue phenomenon"),
                ],
            },
        ],
    },
];
