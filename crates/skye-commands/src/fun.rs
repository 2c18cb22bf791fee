//! Small games.

use crate::framework::{Context, Error};
use rand::seq::SliceRandom;
use rand::Rng;

/// Reply when `choose` gets fewer than two options.
pub const TOO_FEW_CHOICES: &str = "Give me at least two things to choose from.";

/// Splits on commas when there are any, otherwise on whitespace.
pub fn parse_choices(input: &str) -> Vec<&str> {
    let parts: Vec<&str> = if input.contains(',') {
        input.split(',').collect()
    } else {
        input.split_whitespace().collect()
    };
    parts.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Side of a coin for a random bool.
pub const fn coin_side(heads: bool) -> &'static str {
    if heads {
        "Heads"
    } else {
        "Tails"
    }
}

/// Flips a coin.
#[poise::command(slash_command, prefix_command, category = "Fun", aliases("flip"))]
pub async fn coinflip(ctx: Context<'_>) -> Result<(), Error> {
    let heads = rand::thread_rng().gen_bool(0.5);
    ctx.say(coin_side(heads)).await?;
    Ok(())
}

/// Chooses between multiple things.
#[poise::command(slash_command, prefix_command, category = "Fun")]
pub async fn choose(
    ctx: Context<'_>,
    #[description = "Things to choose from, separated by spaces or commas"]
    #[rest]
    choices: String,
) -> Result<(), Error> {
    let options = parse_choices(&choices);
    let reply = if options.len() < 2 {
        TOO_FEW_CHOICES.to_string()
    } else {
        options
            .choose(&mut rand::thread_rng())
            .map_or_else(|| TOO_FEW_CHOICES.to_string(), ToString::to_string)
    };
    ctx.say(reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(parse_choices("tea coffee  water"), ["tea", "coffee", "water"]);
        assert_eq!(parse_choices("ice cream, cake ,, pie"), ["ice cream", "cake", "pie"]);
        assert!(parse_choices("   ").is_empty());
        assert_eq!(parse_choices("one").len(), 1);
    }

    #[test]
    fn test_coin_side() {
        assert_eq!(coin_side(true), "Heads");
        assert_eq!(coin_side(false), "Tails");
    }
}
