/*!
# `[LET] <name> [= <expression>]`

## Purpose
Assign a value to a variable.

## Remarks
`LET` is decorative; an assignment works the same without it. Besides
plain `=` there are the compound forms `+=`, `-=`, `*=`, `/=` and
`%=`, which apply the matching operator to the variable's current
value. A compound assignment to a variable that does not exist yet is
an error.

A subscripted target writes into a dictionary: `d[key] = value`
creates `d` as a fresh dictionary when the name is new. Strings cannot
be written through subscripts.

## Example
```text
let total = 0
total += 5
scores["best"] = total
```

*/
