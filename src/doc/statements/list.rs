/*!
# `LIST`

## Purpose
Show every variable with its current value.

## Remarks
Entries arrive at the host sorted by name, each rendered in its
display form. How the table is shown is up to the host.

## Example
```text
apple = 3
zebra = "stripes"
list
```
```text
apple = 3
zebra = stripes
```

*/
