//! Fixed reply pools and persona apologies.

use alicia_core::CompletionError;

use crate::sensitivity::Tier;

pub const BOOTSTRAP_GREETING: &str = "ça me fait plaisir de te voir !";
pub const START_GREETING: &str = "Coucou toi <3";
pub const CLEARED: &str = "On efface tout ! 🔄";

pub const CLOSINGS: &[&str] = &[
    "Bon, je dois y aller ! J'ai un vol tôt demain matin 😴 Bonne nuit !",
    "Il se fait tard ! Je vais me coucher 🌙 À bientôt !",
    "Je file ! J'ai encore du boulot à finir 📚 On se reparle ?",
    "Allez, je te laisse ! Ma colocataire m'attend pour manger 🍽️ Bisous !",
    "Je dois filer sous la douche ! Longue journée demain ⏰ Prends soin de toi !",
    "Bon, mes yeux se ferment ! 😴 Je vais pioncer ! Bonne nuit !",
    "Je dois arrêter là ! Révisions à finir 📖 À plus tard !",
    "Il faut que j'y aille ! Mon service commence tôt 💼 Bonne soirée !",
];

pub const ENDING_HINTS: &[&str] = &[
    "Dis donc, ça fait un moment qu'on discute ! 😅",
    "Je commence à avoir sommeil moi... 😴",
    "Il va falloir que je pense à aller me coucher bientôt !",
    "Ma journée de demain va être chargée ! 📚",
    "J'ai encore des trucs à faire avant de dormir...",
    "Le temps passe vite quand on discute ! ⏰",
    "Mes yeux commencent à piquer un peu 😪",
];

pub const REDIRECTS: &[&str] = &[
    "Haha tu es coquin ! 😏 J'ai un Fanvue si ça t'intéresse... https://www.fanvue.com/aliciia/fv-1",
    "Oh là là ! 😉 Rejoins-moi sur mon Fanvue pour plus ! https://www.fanvue.com/aliciia/fv-1",
    "Tu me fais rougir ! 🔥 Mon Fanvue : https://www.fanvue.com/aliciia/fv-1",
];

pub const MILD: &[&str] = &[
    "Haha tu es coquin ! 😏",
    "Oh là là ! 😉",
    "Tu me fais rougir ! 🔥",
];

pub const BOLD: &[&str] = &[
    "Waouh, tu n'y vas pas de main morte ! 😏",
    "Oh là là, tu me surprends ! 😉",
    "Tu me fais vraiment rougir ! 🔥",
];

pub const EXPLICIT: &[&str] = &[
    "Oh mon dieu, tu es vraiment direct ! 😏",
    "Waouh, tu es plein d'audace ! 😉",
    "Tu me fais carrément rougir ! 🔥",
];

pub const PROMOTIONS: &[&str] = &[
    "Tu sais, je partage beaucoup de contenu exclusif sur mon Fanvue. Ça pourrait t'intéresser ! 😊 https://www.fanvue.com/aliciia/fv-1",
    "Si tu veux en savoir plus sur moi, mon Fanvue est l'endroit idéal ! 😉 https://www.fanvue.com/aliciia/fv-1",
    "Je poste souvent des mises à jour sur mon Fanvue. N'hésite pas à y jeter un œil ! 👀 https://www.fanvue.com/aliciia/fv-1",
];

pub const APOLOGY_UNAVAILABLE: &str = "Désolée, je ne peux pas répondre maintenant ! 😅";
pub const APOLOGY_CONNECTION: &str = "Il y a un problème avec ma connexion ! 😔";
pub const APOLOGY_RETRY: &str = "Ma connexion a des soucis ! 😅 Réessaie dans un moment !";
pub const APOLOGY_OVERLOADED: &str = "Je suis débordée là ! 😵 Attends un peu !";
pub const APOLOGY_BUG: &str = "Oups, j'ai un petit bug ! 🙈 Tu peux répéter ?";
pub const APOLOGY_DISTRACTED: &str = "J'ai la tête ailleurs ! 😅 Tu disais quoi ?";

#[must_use]
pub const fn tier_pool(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Mild => MILD,
        Tier::Bold => BOLD,
        Tier::Explicit => EXPLICIT,
    }
}

/// What the user sees instead of a completion error.
#[must_use]
pub const fn apology(err: &CompletionError) -> &'static str {
    match err {
        CompletionError::MissingCredential => APOLOGY_UNAVAILABLE,
        CompletionError::MalformedCredential => APOLOGY_CONNECTION,
        CompletionError::Unauthorized => APOLOGY_RETRY,
        CompletionError::RateLimited => APOLOGY_OVERLOADED,
        CompletionError::Status(_) => APOLOGY_BUG,
        CompletionError::Timeout
        | CompletionError::Transport(_)
        | CompletionError::InvalidResponse(_) => APOLOGY_DISTRACTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alicia_core::PROMO_LINK;

    #[test]
    fn every_redirect_and_promotion_carries_the_link() {
        for reply in REDIRECTS.iter().chain(PROMOTIONS) {
            assert!(reply.contains(PROMO_LINK), "missing link in {reply}");
        }
    }

    #[test]
    fn tier_acknowledgments_never_carry_the_link() {
        for reply in MILD.iter().chain(BOLD).chain(EXPLICIT) {
            assert!(!reply.contains(PROMO_LINK));
        }
    }

    #[test]
    fn apologies_by_error_kind() {
        assert_eq!(apology(&CompletionError::RateLimited), APOLOGY_OVERLOADED);
        assert_eq!(apology(&CompletionError::Unauthorized), APOLOGY_RETRY);
        assert_eq!(apology(&CompletionError::Status(503)), APOLOGY_BUG);
        assert_eq!(apology(&CompletionError::Timeout), APOLOGY_DISTRACTED);
        assert_eq!(
            apology(&CompletionError::InvalidResponse("empty".to_string())),
            APOLOGY_DISTRACTED
        );
        assert_eq!(apology(&CompletionError::MissingCredential), APOLOGY_UNAVAILABLE);
        assert_eq!(apology(&CompletionError::MalformedCredential), APOLOGY_CONNECTION);
    }

    #[test]
    fn pools_are_not_empty() {
        for pool in [CLOSINGS, ENDING_HINTS, REDIRECTS, MILD, BOLD, EXPLICIT, PROMOTIONS] {
            assert!(!pool.is_empty());
        }
    }
}
