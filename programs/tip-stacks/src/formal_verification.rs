// ============================================================================
// FORMAL VERIFICATION & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Property-based tests (invariants)
// 2. Deterministic fuzzing (edge cases)
// 3. A simulated ledger driven through the same helpers as the handlers
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use crate::constants::*;
    use crate::helpers::*;
    use crate::state::*;
    use anchor_lang::prelude::*;
    use std::collections::BTreeMap;

    /// Deterministic pseudo-random sequence (64-bit LCG)
    struct Lcg(u64);

    impl Lcg {
        fn next_u64(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            self.0 >> 11
        }

        fn below(&mut self, bound: u64) -> u64 {
            self.next_u64() % bound
        }
    }

    // ========================================================================
    // SIMULATED LEDGER
    // ========================================================================

    /// In-memory mirror of the program accounts
    ///
    /// Applies the same plan/apply sequence as the instruction handlers,
    /// with maps standing in for PDAs.
    struct SimulatedPlatform {
        config: PlatformConfig,
        treasury: PlatformTreasury,
        stats: BTreeMap<Pubkey, TipStats>,
        identities: BTreeMap<Pubkey, UserIdentity>,
        records: BTreeMap<[u8; 32], UsernameRecord>,
    }

    impl SimulatedPlatform {
        fn new() -> Self {
            Self {
                config: PlatformConfig {
                    admin: Pubkey::new_unique(),
                    treasury: Pubkey::new_unique(),
                    address: Pubkey::new_unique(),
                    bump: 255,
                    treasury_bump: 255,
                },
                treasury: PlatformTreasury::default(),
                stats: BTreeMap::new(),
                identities: BTreeMap::new(),
                records: BTreeMap::new(),
            }
        }

        fn tip(&mut self, sender: Pubkey, recipient: Pubkey, amount: u64, token_tag: &str) -> Result<TipPlan> {
            let reward_rate = self.stats_of(&sender).reward_rate();
            let plan = TipPlan::build(&self.config, sender, recipient, amount, token_tag, reward_rate)?;

            plan.apply_to_sender(self.stats.entry(sender).or_insert_with(|| TipStats::new(sender, 0)));
            plan.apply_to_recipient(self.stats.entry(recipient).or_insert_with(|| TipStats::new(recipient, 0)));
            plan.apply_to_treasury(&mut self.treasury);
            Ok(plan)
        }

        fn set_identity(&mut self, signer: Pubkey, account: Pubkey, username: &str) -> Result<IdentityChange> {
            validate_identity_request(&signer, &account, username)?;

            let seed = username_seed(username);
            let mut record = self.records.get(&seed).cloned().unwrap_or_default();
            let mut identity = self.identities.get(&account).cloned().unwrap_or_default();

            let change = IdentityChange::plan(account, username, &identity, &record)?;

            let mut previous = change
                .released_seed()
                .map(|previous_seed| (previous_seed, self.records.get(&previous_seed).cloned().unwrap_or_default()));

            change.apply(&mut identity, 0, &mut record, 0, previous.as_mut().map(|(_, r)| r));

            if let Some((previous_seed, previous_record)) = previous {
                self.records.insert(previous_seed, previous_record);
            }
            self.records.insert(seed, record);
            self.identities.insert(account, identity);
            Ok(change)
        }

        fn set_reward_rate(&mut self, caller: Pubkey, account: Pubkey, value: u64) -> Result<()> {
            validate_admin(&self.config, &caller)?;
            self.stats
                .entry(account)
                .or_insert_with(|| TipStats::new(account, 0))
                .set_reward_rate(value);
            Ok(())
        }

        fn stats_of(&self, account: &Pubkey) -> TipStats {
            self.stats.get(account).cloned().unwrap_or_default()
        }

        fn owner_of(&self, username: &str) -> Pubkey {
            self.records
                .get(&username_seed(username))
                .map(|record| record.owner)
                .unwrap_or_default()
        }
    }

    // ========================================================================
    // SECTION 1: CORE INVARIANTS
    // ========================================================================

    mod invariants {
        use super::*;

        /// INV-1: Conservation of Value
        /// platform_fee + net_amount = amount, fee = floor(amount * 5 / 100)
        #[test]
        fn inv1_conservation_of_value() {
            let test_cases: Vec<u64> = vec![
                1,
                19,
                20,
                999_999,
                REWARD_THRESHOLD,
                10_000_000,
                123_456_789,
                MAX_TIP_AMOUNT - 1,
                MAX_TIP_AMOUNT,
            ];

            for amount in test_cases {
                let (fee, net) = split_tip(amount);

                assert_eq!(fee + net, amount, "INV-1 violated for amount={}", amount);
                assert_eq!(fee as u128, amount as u128 * 5 / 100);
                // Fee never exceeds 5%
                assert!(fee * 20 <= amount, "fee {} above 5% of {}", fee, amount);
            }
        }

        /// INV-2: Reward Step Function
        /// points = REWARD_RATE iff amount >= REWARD_THRESHOLD, else 0
        #[test]
        fn inv2_reward_step_function() {
            let mut rng = Lcg(7);
            for _ in 0..10_000 {
                let amount = rng.below(MAX_TIP_AMOUNT) + 1;
                let points = compute_reward_points(amount, REWARD_RATE);

                if amount >= REWARD_THRESHOLD {
                    assert_eq!(points, REWARD_RATE, "amount={}", amount);
                } else {
                    assert_eq!(points, 0, "amount={}", amount);
                }
            }
        }

        /// INV-3: Monotone Counters
        /// No successful or failed tip ever decreases a stats counter
        #[test]
        fn inv3_counters_never_decrease() {
            let mut platform = SimulatedPlatform::new();
            let users: Vec<Pubkey> = (0..6).map(|_| Pubkey::new_unique()).collect();
            let mut rng = Lcg(42);

            for _ in 0..2_000 {
                let sender = users[rng.below(users.len() as u64) as usize];
                let recipient = users[rng.below(users.len() as u64) as usize];
                // Occasionally out of range to exercise rejected tips
                let amount = rng.below(MAX_TIP_AMOUNT + 10_000_000);

                let before: Vec<TipStats> = users.iter().map(|u| platform.stats_of(u)).collect();
                let treasury_before = platform.treasury.view();

                let _ = platform.tip(sender, recipient, amount, SETTLEMENT_TOKEN_TAG);

                for (user, old) in users.iter().zip(before.iter()) {
                    let new = platform.stats_of(user);
                    assert!(new.total_sent >= old.total_sent);
                    assert!(new.total_received >= old.total_received);
                    assert!(new.reward_points >= old.reward_points);
                }
                let treasury_after = platform.treasury.view();
                assert!(treasury_after.total_tips >= treasury_before.total_tips);
                assert!(treasury_after.total_fees_collected >= treasury_before.total_fees_collected);
            }
        }

        /// INV-4: Ledger Balance
        /// Sum of sent = platform volume, sum of received + fees = volume
        #[test]
        fn inv4_ledger_balances() {
            let mut platform = SimulatedPlatform::new();
            let users: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
            let mut rng = Lcg(1234);

            for _ in 0..1_000 {
                let sender = users[rng.below(users.len() as u64) as usize];
                let recipient = users[rng.below(users.len() as u64) as usize];
                let amount = rng.below(MAX_TIP_AMOUNT) + 1;
                let _ = platform.tip(sender, recipient, amount, SETTLEMENT_TOKEN_TAG);
            }

            let total_sent: u64 = users.iter().map(|u| platform.stats_of(u).total_sent).sum();
            let total_received: u64 = users.iter().map(|u| platform.stats_of(u).total_received).sum();
            let view = platform.treasury.view();

            assert_eq!(total_sent, view.total_volume);
            assert_eq!(total_received + view.total_fees_collected, view.total_volume);
        }

        /// INV-5: Username Uniqueness
        /// At most one account owns any normalized username
        #[test]
        fn inv5_username_uniqueness() {
            let mut platform = SimulatedPlatform::new();
            let users: Vec<Pubkey> = (0..8).map(|_| Pubkey::new_unique()).collect();
            let names = ["alice", "ALICE", "bob", "Bob", "carol", "dave_01", "Dave_01"];
            let mut rng = Lcg(99);

            for _ in 0..3_000 {
                let user = users[rng.below(users.len() as u64) as usize];
                let name = names[rng.below(names.len() as u64) as usize];
                let _ = platform.set_identity(user, user, name);

                // Every record owner's identity points back at that record
                for record in platform.records.values() {
                    if record.is_claimed() {
                        let identity = &platform.identities[&record.owner];
                        assert_eq!(
                            normalize_username(&identity.username),
                            normalize_username(&record.username)
                        );
                    }
                }

                // Every identity is the sole owner of its name
                for (account, identity) in &platform.identities {
                    if identity.has_username() {
                        assert_eq!(platform.owner_of(&identity.username), *account);
                    }
                }
            }
        }

        /// INV-6: Query Idempotence
        /// Reads never change state and repeat identically
        #[test]
        fn inv6_query_idempotence() {
            let mut platform = SimulatedPlatform::new();
            let user1 = Pubkey::new_unique();
            let user2 = Pubkey::new_unique();
            platform.tip(user1, user2, 10_000_000, SETTLEMENT_TOKEN_TAG).unwrap();
            platform.set_identity(user1, user1, "alice").unwrap();

            let stats = platform.stats_of(&user1);
            assert_eq!(stats.view(), stats.view());
            assert_eq!(stats.view(), platform.stats_of(&user1).view());

            let identity = &platform.identities[&user1];
            assert_eq!(identity.view(), identity.view());

            assert_eq!(platform.treasury.view(), platform.treasury.view());

            // Unseen accounts read as zero
            assert_eq!(platform.stats_of(&Pubkey::new_unique()).view(), TipStatsView::default());
        }
    }

    // ========================================================================
    // SECTION 2: SECURITY PROPERTIES
    // ========================================================================

    mod security {
        use super::*;

        /// SEC-1: Failed tips leave no trace
        #[test]
        fn sec1_rejected_tip_is_atomic() {
            let mut platform = SimulatedPlatform::new();
            let user1 = Pubkey::new_unique();
            let user2 = Pubkey::new_unique();
            let admin = platform.config.admin;

            assert!(platform.tip(user1, user2, 0, SETTLEMENT_TOKEN_TAG).is_err());
            assert!(platform.tip(user1, user2, MAX_TIP_AMOUNT + 1, SETTLEMENT_TOKEN_TAG).is_err());
            assert!(platform.tip(user1, user1, 1_000_000, SETTLEMENT_TOKEN_TAG).is_err());
            assert!(platform.tip(user1, admin, 1_000_000, SETTLEMENT_TOKEN_TAG).is_err());
            assert!(platform.tip(user1, user2, 1_000_000, "XYZ").is_err());

            assert!(platform.stats.is_empty());
            assert_eq!(platform.treasury.view(), PlatformStatsView::default());
        }

        /// SEC-2: Only the admin sets reward rates or withdraws fees
        #[test]
        fn sec2_reward_rate_admin_only() {
            let mut platform = SimulatedPlatform::new();
            let user1 = Pubkey::new_unique();
            let user2 = Pubkey::new_unique();

            assert!(platform.set_reward_rate(user2, user1, 100).is_err());
            assert_eq!(platform.stats_of(&user1).reward_rate(), REWARD_RATE);

            let admin = platform.config.admin;
            platform.set_reward_rate(admin, user1, 100).unwrap();
            assert_eq!(platform.stats_of(&user1).reward_rate(), 100);

            // Every non-admin caller gets Unauthorized from the shared gate
            let callers = [user1, user2, platform.config.treasury, platform.config.address];
            for caller in callers {
                match validate_admin(&platform.config, &caller) {
                    Err(anchor_lang::error::Error::AnchorError(e)) => assert_eq!(e.error_code_number, 6),
                    other => panic!("unexpected {:?} for {}", other, caller),
                }
            }
        }

        /// SEC-3: Only the account itself registers its identity
        #[test]
        fn sec3_identity_self_only() {
            let mut platform = SimulatedPlatform::new();
            let user1 = Pubkey::new_unique();
            let user2 = Pubkey::new_unique();
            let admin = platform.config.admin;

            assert!(platform.set_identity(user2, user1, "alice").is_err());
            assert!(platform.set_identity(admin, user1, "alice").is_err());
            assert!(platform.identities.is_empty());
            assert!(platform.records.is_empty());
        }

        /// SEC-4: No arithmetic overflow on extreme inputs
        #[test]
        fn sec4_no_arithmetic_overflow() {
            for amount in [0u64, 1, u64::MAX / 2, u64::MAX - 1, u64::MAX] {
                let (fee, net) = split_tip(amount);
                assert!(fee <= amount);
                assert_eq!(fee.checked_add(net), Some(amount));
            }

            let mut stats = TipStats::default();
            stats.total_received = u64::MAX;
            stats.record_received(u64::MAX);
            assert_eq!(stats.total_received, u64::MAX);
        }
    }

    // ========================================================================
    // SECTION 3: FUZZING
    // ========================================================================

    mod fuzzing {
        use super::*;

        /// FUZZ-1: Validation order holds for every combination of bad inputs
        #[test]
        fn fuzz1_tip_validation_order() {
            let platform = SimulatedPlatform::new();
            let sender = Pubkey::new_unique();
            let other = Pubkey::new_unique();

            let tags = [(SETTLEMENT_TOKEN_TAG, true), ("XYZ", false), ("", false)];
            let amounts = [(0u64, false), (1, true), (MAX_TIP_AMOUNT, true), (MAX_TIP_AMOUNT + 1, false)];
            let recipients = [
                (other, true),
                (sender, false),
                (platform.config.admin, false),
                (platform.config.treasury, false),
                (platform.config.address, false),
            ];

            for (tag, tag_ok) in tags {
                for (amount, amount_ok) in amounts {
                    for (recipient, recipient_ok) in recipients {
                        let result = TipPlan::build(&platform.config, sender, recipient, amount, tag, REWARD_RATE);

                        let expected = if !tag_ok {
                            Some(11)
                        } else if !amount_ok {
                            Some(2)
                        } else if !recipient_ok {
                            Some(5)
                        } else {
                            None
                        };

                        match (result, expected) {
                            (Ok(_), None) => {}
                            (Err(anchor_lang::error::Error::AnchorError(e)), Some(code)) => {
                                assert_eq!(e.error_code_number, code, "tag={:?} amount={}", tag, amount)
                            }
                            (other_result, _) => panic!(
                                "unexpected {:?} for tag={:?} amount={} expected={:?}",
                                other_result, tag, amount, expected
                            ),
                        }
                    }
                }
            }
        }

        /// FUZZ-2: Username lengths around the bounds
        #[test]
        fn fuzz2_username_length_bounds() {
            for length in 0..=40usize {
                let ascii = "a".repeat(length);
                let wide = "\u{00E9}".repeat(length);
                let expected = (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length);

                assert_eq!(validate_username(&ascii).is_ok(), expected, "ascii length {}", length);
                assert_eq!(validate_username(&wide).is_ok(), expected, "wide length {}", length);
                if expected {
                    assert!(wide.len() <= MAX_USERNAME_BYTES);
                }
            }
        }

        /// FUZZ-3: Plans are deterministic
        #[test]
        fn fuzz3_plan_determinism() {
            let platform = SimulatedPlatform::new();
            let sender = Pubkey::new_unique();
            let recipient = Pubkey::new_unique();
            let mut rng = Lcg(2024);

            for _ in 0..1_000 {
                let amount = rng.below(MAX_TIP_AMOUNT) + 1;
                let first = TipPlan::build(&platform.config, sender, recipient, amount, SETTLEMENT_TOKEN_TAG, REWARD_RATE).unwrap();
                let second = TipPlan::build(&platform.config, sender, recipient, amount, SETTLEMENT_TOKEN_TAG, REWARD_RATE).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    // ========================================================================
    // STATE MACHINE TESTS
    // ========================================================================

    mod state_machine {
        use super::*;

        /// Name lifecycle: claim, conflict, rename, reclaim
        #[test]
        fn test_username_lifecycle() {
            let mut platform = SimulatedPlatform::new();
            let user1 = Pubkey::new_unique();
            let user2 = Pubkey::new_unique();

            platform.set_identity(user1, user1, "testuser").unwrap();
            assert_eq!(platform.owner_of("testuser"), user1);

            // Taken, in any case
            assert!(platform.set_identity(user2, user2, "testuser").is_err());
            assert!(platform.set_identity(user2, user2, "TestUser").is_err());

            // Rename frees the old name
            let change = platform.set_identity(user1, user1, "newname").unwrap();
            assert_eq!(change.released_username.as_deref(), Some("testuser"));
            assert_eq!(platform.owner_of("testuser"), Pubkey::default());
            assert_eq!(platform.owner_of("newname"), user1);

            // Now claimable by someone else
            platform.set_identity(user2, user2, "TestUser").unwrap();
            assert_eq!(platform.owner_of("testuser"), user2);
            assert_eq!(platform.identities[&user2].username, "TestUser");
            assert!(platform.identities[&user2].verified);
        }

        /// Reward rate changes apply to later tips only
        #[test]
        fn test_reward_rate_transitions() {
            let mut platform = SimulatedPlatform::new();
            let admin = platform.config.admin;
            let user1 = Pubkey::new_unique();
            let user2 = Pubkey::new_unique();

            platform.tip(user1, user2, 2_000_000, SETTLEMENT_TOKEN_TAG).unwrap();
            assert_eq!(platform.stats_of(&user1).reward_points, 10);

            platform.set_reward_rate(admin, user1, 25).unwrap();
            assert_eq!(platform.stats_of(&user1).reward_points, 10);

            let plan = platform.tip(user1, user2, 2_000_000, SETTLEMENT_TOKEN_TAG).unwrap();
            assert_eq!(plan.reward_points, 25);
            assert_eq!(platform.stats_of(&user1).reward_points, 35);

            // Below threshold never earns, whatever the rate
            platform.tip(user1, user2, REWARD_THRESHOLD - 1, SETTLEMENT_TOKEN_TAG).unwrap();
            assert_eq!(platform.stats_of(&user1).reward_points, 35);
        }
    }
}
