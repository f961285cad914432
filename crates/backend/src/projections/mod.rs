pub mod p900_player_loot;
